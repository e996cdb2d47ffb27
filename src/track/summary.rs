use crate::domain::{GeoPoint, SpeedUnit, TrackingSession};
use crate::format::{format_distance, format_duration};
use crate::geo::{calculate_path_distance, calculate_speed};
use std::fmt::Display;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct TrackSummary {
    session_id: String,
    point_count: usize,
    start: Option<GeoPoint>,
    distance: f64,
    duration_ms: f64,
    average_speed: f64,
    speed_unit: SpeedUnit,
}

impl TrackSummary {
    /// Summarizes `session`, taking its points in the order they were recorded.
    pub fn from_session(session: &TrackingSession, speed_unit: SpeedUnit) -> Result<TrackSummary, SummaryError> {
        let positions = session.positions();
        let distance = calculate_path_distance(&positions);

        let duration_ms = match (session.end_time, session.points.first(), session.points.last()) {
            (Some(end_time), _, _) if end_time < session.start_time => {
                return Err(SummaryError::EndsBeforeStart { id: session.id.clone() });
            }
            (Some(end_time), _, _) => (end_time - session.start_time).num_milliseconds() as f64,
            (None, Some(first), Some(last)) => (last.recorded_at - first.recorded_at).num_milliseconds() as f64,
            _ => 0.0,
        };

        Ok(TrackSummary {
            session_id: session.id.clone(),
            point_count: positions.len(),
            start: positions.first().copied(),
            distance,
            duration_ms,
            average_speed: calculate_speed(distance, duration_ms, speed_unit),
            speed_unit,
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn start(&self) -> Option<&GeoPoint> {
        self.start.as_ref()
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn average_speed(&self) -> f64 {
        self.average_speed
    }

    pub fn speed_unit(&self) -> SpeedUnit {
        self.speed_unit
    }
}

impl Display for TrackSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} in {} over {} points, {:.2} {}",
            self.session_id,
            format_distance(self.distance),
            format_duration(self.duration_ms),
            self.point_count,
            self.average_speed,
            self.speed_unit
        )
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SummaryError {
    #[error("session '{id}' ends before it starts")]
    EndsBeforeStart { id: String },
}
