use crate::geo::calculate_distance;
use thiserror::Error;

/// A geographic position in degrees with an optional altitude in meters.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>, // In meters
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint {
            latitude,
            longitude,
            altitude: None,
        }
    }

    pub fn with_altitude(latitude: f64, longitude: f64, altitude: f64) -> Self {
        GeoPoint {
            latitude,
            longitude,
            altitude: Some(altitude),
        }
    }

    pub fn altitude_or_zero(&self) -> f64 {
        self.altitude.unwrap_or(0.0)
    }

    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        calculate_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
            self.altitude_or_zero(),
            other.altitude_or_zero(),
        )
    }

    /// Checks the nominal coordinate ranges. The distance functions never call this.
    pub fn validate(&self) -> Result<(), GeoError> {
        let latitude_ok = (-90.0..=90.0).contains(&self.latitude);
        let longitude_ok = (-180.0..=180.0).contains(&self.longitude);
        if !latitude_ok || !longitude_ok {
            return Err(GeoError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            });
        }

        match self.altitude {
            Some(altitude) if !altitude.is_finite() => Err(GeoError::InvalidAltitude(altitude)),
            _ => Ok(()),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum GeoError {
    #[error("invalid coordinate ({latitude}, {longitude}), latitude must be between -90 and 90 and longitude between -180 and 180")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
    #[error("invalid altitude: {0}, must be a finite number of meters")]
    InvalidAltitude(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(GeoPoint::new(0.0, 0.0))]
    #[case(GeoPoint::new(90.0, 180.0))]
    #[case(GeoPoint::new(-90.0, -180.0))]
    #[case(GeoPoint::with_altitude(31.5590, 35.4732, -430.5))]
    fn validate_accepts_nominal_ranges(#[case] point: GeoPoint) {
        assert_eq!(point.validate(), Ok(()));
    }

    #[rstest]
    #[case::latitude_too_large(GeoPoint::new(90.1, 0.0))]
    #[case::latitude_too_small(GeoPoint::new(-91.0, 0.0))]
    #[case::longitude_too_large(GeoPoint::new(0.0, 180.5))]
    #[case::longitude_too_small(GeoPoint::new(0.0, -200.0))]
    #[case::nan_latitude(GeoPoint::new(f64::NAN, 0.0))]
    #[case::infinite_longitude(GeoPoint::new(0.0, f64::INFINITY))]
    fn validate_rejects_invalid_coordinates(#[case] point: GeoPoint) {
        assert!(matches!(point.validate(), Err(GeoError::InvalidCoordinate { .. })));
    }

    #[test]
    fn validate_rejects_a_non_finite_altitude() {
        let point = GeoPoint::with_altitude(10.0, 10.0, f64::NEG_INFINITY);
        assert_eq!(point.validate(), Err(GeoError::InvalidAltitude(f64::NEG_INFINITY)));
    }

    #[test]
    fn distance_to_treats_a_missing_altitude_as_zero() {
        let ground = GeoPoint::new(37.4219983, -122.084);
        let above = GeoPoint::with_altitude(37.4219983, -122.084, 25.0);

        assert_eq!(ground.distance_to(&above), 25.0);
        assert_eq!(above.distance_to(&ground), 25.0);
    }
}
