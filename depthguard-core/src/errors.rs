//! Error Types for the Filter Engine
//!
//! ## Design Philosophy
//!
//! The filter is a pure, deterministic computation. Every error is fatal to
//! the call that produced it: there is no partial output and no point in
//! retrying with the same input.
//!
//! ## Error Categories
//!
//! ### Input Errors
//! - `TimestampParse`: a sample's timestamp is not a valid ISO-8601 date/time
//! - `MixedTimezones`: naive and offset-aware timestamps in the same series
//!
//! ### Configuration Errors
//! - `ConfigInvariant`: non-positive window size, negative or non-finite multiplier
//! - `Json`: a configuration document could not be decoded
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use depthguard_core::{filter_outliers, FilterConfig, FilterError, Sample, Units};
//!
//! let samples = vec![Sample::new("not a date", Some(12.0))];
//!
//! match filter_outliers(&samples, &FilterConfig::SNOW_DEPTH, Units::Imperial) {
//!     Ok(filtered) => {
//!         // hand back to the caller for re-insertion
//!         # let _ = filtered;
//!     }
//!     Err(FilterError::TimestampParse { timestamp, index }) => {
//!         // upstream produced a bad row - report it, don't guess
//!         # let _ = (timestamp, index);
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

/// Filter engine errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Timestamp could not be parsed as a date/time
    #[error("Cannot parse timestamp {timestamp:?} at index {index}")]
    TimestampParse {
        /// The raw timestamp text
        timestamp: String,
        /// Position of the offending sample in the input
        index: usize,
    },

    /// Naive and offset-aware timestamps cannot be ordered against each other
    #[error("Timestamp at index {index} mixes naive and offset-aware date/times")]
    MixedTimezones {
        /// Position of the first sample whose kind differs from the first sample
        index: usize,
    },

    /// Configuration violates a structural invariant
    #[error("Invalid configuration field `{field}`: {reason}")]
    ConfigInvariant {
        /// Name of the offending field
        field: &'static str,
        /// What the field must satisfy
        reason: &'static str,
    },

    /// Configuration document could not be decoded
    #[error("Invalid configuration document: {0}")]
    Json(String),
}

impl From<serde_json::Error> for FilterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
