//! Outlier Detectors for Snow Depth Series
//!
//! ## Overview
//!
//! Snow depth sensors fail in characteristic ways: ultrasonic rangers echo
//! off blowing snow, a bird on the mast reads as a meter of fresh powder,
//! and a wet sensor drops out for hours. These glitches show up as isolated
//! spikes or gaps against an otherwise slowly moving signal.
//!
//! The detectors here judge every sample against statistics of its own
//! neighborhood instead of fixed limits, so the same configuration works on
//! a 20 cm early-season base and a 4 m late-winter pack.
//!
//! ## Sliding-Window IQR
//!
//! For each sample:
//!
//! ```text
//! window   = samples[i - half ..= i + half] (truncated at the ends)
//! sorted   = present values of window, ascending
//! q1, q3   = sorted[len / 4], sorted[3 * len / 4]
//! fences   = [q1 - lower * iqr, q3 + upper * iqr]
//! verdict  = keep if inside fences, null otherwise
//! ```
//!
//! Separate upper and lower multipliers encode the physical asymmetry of the
//! stream. Depth rarely jumps up without snowfall but drops quickly with
//! settling; the 24-hour delta swings the other way.
//!
//! ## Usage Example
//!
//! ```rust
//! use depthguard_core::detector::SlidingWindowDetector;
//! use depthguard_core::{OutlierDetector, Sample};
//!
//! let samples: Vec<Sample> = [10.0, 10.0, 10.0, 100.0, 10.0, 10.0, 10.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(hour, depth)| Sample::new(format!("2024-01-15T{:02}:00:00", hour), Some(*depth)))
//!     .collect();
//!
//! let detector = SlidingWindowDetector::new(5, 1.0, 1.0);
//! let filtered = detector.detect(&samples);
//!
//! assert_eq!(filtered[3].value, None);
//! assert_eq!(filtered[2].value, Some(10.0));
//! ```
//!
//! Input must already be in chronological order; the pipeline
//! ([`crate::pipeline`]) takes care of that.

mod iqr;
pub mod utils;

pub use iqr::{SlidingWindowDetector, Verdict};
pub use utils::IqrBounds;
