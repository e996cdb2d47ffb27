use crate::domain::GeoPoint;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackPoint {
    pub hiker_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    pub recorded_at: DateTime<Utc>,
}

impl TrackPoint {
    pub fn position(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
            altitude: self.altitude,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingSession {
    pub id: String,
    pub user_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub points: Vec<TrackPoint>,
    /// Distance as reported by the backend, if any.
    pub distance: Option<f64>,
}

impl TrackingSession {
    pub fn positions(&self) -> Vec<GeoPoint> {
        self.points.iter().map(TrackPoint::position).collect()
    }
}
