mod distance;
mod speed;

pub use distance::{EARTH_RADIUS_M, calculate_distance, calculate_path_distance};
pub use speed::calculate_speed;
