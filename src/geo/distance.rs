use crate::domain::GeoPoint;

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Returns the distance in meters between two positions given in degrees.
///
/// The great-circle surface distance is computed with the Haversine formula and combined with the
/// altitude difference as `sqrt(surface² + Δh²)`. Pass `0.0` for an unknown altitude.
pub fn calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64, alt1: f64, alt2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    // a is always within [0, 1] for finite input, so both square roots are defined
    let a = (delta_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    let surface_distance = EARTH_RADIUS_M * c;

    let height_difference = alt2 - alt1;
    (surface_distance.powi(2) + height_difference.powi(2)).sqrt()
}

/// Returns the summed distance in meters between consecutive points, in the given order.
///
/// Fewer than two points yield 0. A missing altitude counts as 0 for that point only.
pub fn calculate_path_distance(points: &[GeoPoint]) -> f64 {
    points.windows(2).map(|pair| pair[0].distance_to(&pair[1])).sum()
}
