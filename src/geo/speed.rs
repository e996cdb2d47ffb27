use crate::domain::SpeedUnit;

/// Returns the speed for `distance_meters` covered in `duration_ms` milliseconds.
///
/// A duration of zero or less yields 0 instead of an infinite or negative speed.
pub fn calculate_speed(distance_meters: f64, duration_ms: f64, unit: SpeedUnit) -> f64 {
    if duration_ms <= 0.0 {
        return 0.0;
    }

    let meters_per_second = distance_meters / (duration_ms / 1000.0);
    meters_per_second * unit.factor()
}
