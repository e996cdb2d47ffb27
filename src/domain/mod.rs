mod geo_point;
mod speed_unit;
mod tracking_session;

pub use geo_point::{GeoError, GeoPoint};
pub use speed_unit::SpeedUnit;
pub use tracking_session::{TrackPoint, TrackingSession};
