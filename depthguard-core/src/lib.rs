//! Core filter engine for DepthGuard
//!
//! Removes sensor glitches from snow depth time series before they reach
//! reporting or accumulation code. Each sample is judged against IQR fences
//! computed from its centered neighborhood; outliers are nulled, never
//! removed, so the caller can merge results back by timestamp.
//!
//! Key properties:
//! - Stateless: every call is a pure function of (samples, config, units)
//! - Output has the input's length, in chronological order
//! - No partial results: a bad timestamp fails the whole call
//!
//! ```no_run
//! use depthguard_core::{filter_outliers, FilterConfig, Sample, Units};
//!
//! let samples = vec![
//!     Sample::new("2024-01-15T00:00:00", Some(41.0)),
//!     Sample::new("2024-01-15T01:00:00", Some(41.5)),
//! ];
//!
//! // Station reports centimeters
//! match filter_outliers(&samples, &FilterConfig::SNOW_DEPTH, Units::Metric) {
//!     Ok(filtered) => {}, // Merge back by timestamp
//!     Err(e) => {},       // Bad timestamps upstream
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod detector;
pub mod errors;
pub mod pipeline;
pub mod time;
pub mod traits;
pub mod units;

// Public API
pub use config::{FilterConfig, FilterConfigBuilder, MeasurementKind};
pub use detector::{SlidingWindowDetector, Verdict};
pub use errors::{FilterError, FilterResult};
pub use pipeline::{filter_outliers, FilterSummary, OutlierFilter};
pub use traits::{FilteredSample, OutlierDetector, Sample};
pub use units::Units;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn public_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FilterConfig>();
        assert_send_sync::<OutlierFilter>();
        assert_send_sync::<Sample>();
        assert_send_sync::<FilterError>();
    }
}
