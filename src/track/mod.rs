mod summary;

pub use summary::{SummaryError, TrackSummary};
