use crate::error::Error;

/// Result type alias used throughout the record layer.
pub type Result<T> = std::result::Result<T, Error>;
