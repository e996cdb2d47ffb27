//! Distance, speed and display helpers for recorded hikes.
//!
//! The [`geo`] functions are pure and never fail. Loading and summarizing recorded tracking
//! sessions builds on top of them.

pub mod app_config;
pub mod domain;
mod extensions;
pub mod format;
pub mod geo;
mod geo_point_deserializer;
pub mod track;
pub mod track_loader;

pub use domain::{GeoError, GeoPoint, SpeedUnit};
pub use format::{format_coordinates, format_distance, format_duration};
pub use geo::{calculate_distance, calculate_path_distance, calculate_speed};
