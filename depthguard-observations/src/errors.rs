//! Error types for the observation adapter

use depthguard_core::FilterError;
use thiserror_no_std::Error;

/// Result type for adapter operations
pub type ObservationResult<T> = Result<T, ObservationError>;

/// Adapter errors
#[derive(Error, Debug)]
pub enum ObservationError {
    /// The filter engine refused a column
    #[error("Filtering failed: {0}")]
    Filter(#[from] FilterError),

    /// Rows could not be read or written as JSON
    #[error("Observation JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
