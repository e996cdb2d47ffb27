use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedUnit {
    #[default]
    #[serde(rename = "m/s")]
    MetersPerSecond,
    #[serde(rename = "km/h")]
    KilometersPerHour,
}

impl SpeedUnit {
    pub fn factor(&self) -> f64 {
        match self {
            SpeedUnit::MetersPerSecond => 1.0,
            SpeedUnit::KilometersPerHour => 3.6,
        }
    }
}

impl Display for SpeedUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpeedUnit::MetersPerSecond => write!(f, "m/s"),
            SpeedUnit::KilometersPerHour => write!(f, "km/h"),
        }
    }
}
