//! Display strings for distances, durations and coordinates.

use crate::extensions::f64_ext::DecimalFormat;

pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        return format!("{}m", round_half_up(meters).to_plain());
    }
    format!("{}km", (meters / 1000.0).to_fixed(2))
}

/// Formats a duration in milliseconds using its two largest units, e.g. `1h 1m`, `1m 5s` or `45s`.
///
/// Non-finite durations are not rejected, `NaN` renders as `NaNs`.
pub fn format_duration(milliseconds: f64) -> String {
    let seconds = (milliseconds / 1000.0).floor();
    let minutes = (seconds / 60.0).floor();
    let hours = (minutes / 60.0).floor();

    if hours > 0.0 {
        return format!("{}h {}m", hours.to_plain(), (minutes % 60.0).to_plain());
    }
    if minutes > 0.0 {
        return format!("{}m {}s", minutes.to_plain(), (seconds % 60.0).to_plain());
    }
    format!("{}s", seconds.to_plain())
}

pub fn format_coordinates(latitude: f64, longitude: f64, altitude: f64) -> String {
    format!("{}, {}, {}", latitude.to_fixed(6), longitude.to_fixed(6), altitude.to_fixed(3))
}

// Halves round towards positive infinity, so -0.5 becomes 0 and 0.5 becomes 1.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}
