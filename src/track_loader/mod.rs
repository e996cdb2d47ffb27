mod loader;

pub use loader::{LoaderError, load_sessions_from};
