use crate::domain::GeoPoint;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
            #[serde(alias = "altitude_m")]
            altitude: Option<f64>,
        }

        let inner = Inner::deserialize(deserializer)?;
        let point = GeoPoint {
            latitude: inner.latitude,
            longitude: inner.longitude,
            altitude: inner.altitude,
        };

        point.validate().map_err(D::Error::custom)?;
        Ok(point)
    }
}
