//! Window and fence utilities shared by detectors
//!
//! Pure functions with no side effects, easy to test in isolation.
//!
//! ## Window Layout
//!
//! ```text
//! window_size = 5, half = 2, N = 7
//!
//! i = 0:  [0, 3)   ← truncated, 3 samples
//! i = 3:  [1, 6)   ← full, 5 samples
//! i = 6:  [4, 7)   ← truncated, 3 samples
//! ```
//!
//! Even window sizes still produce odd, centered windows (`2 * half + 1`
//! samples), so a 24-sample preset looks 12 samples each way.
//!
//! ## Quartile Estimator
//!
//! Quartiles are read straight off the sorted window by index:
//!
//! ```text
//! q1 = sorted[floor(len * 0.25)]
//! q3 = sorted[floor(len * 0.75)]
//! ```
//!
//! No interpolation. Results must match historical output bit for bit, so
//! this is not interchangeable with textbook quartile methods.

use core::ops::Range;

/// Positions of the centered window around `index`, truncated at both ends
pub fn window_range(index: usize, len: usize, window_size: usize) -> Range<usize> {
    let half = window_size / 2;
    let start = index.saturating_sub(half);
    let end = index.saturating_add(half).saturating_add(1).min(len);
    start..end
}

/// Index-based first and third quartiles of an ascending slice
pub fn quartiles(sorted: &[f64]) -> Option<(f64, f64)> {
    if sorted.is_empty() {
        return None;
    }

    // floor(len * 0.25) and floor(len * 0.75) without float rounding
    let len = sorted.len();
    Some((sorted[len / 4], sorted[len * 3 / 4]))
}

/// Acceptance fences computed from one window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqrBounds {
    /// First quartile
    pub q1: f64,
    /// Third quartile
    pub q3: f64,
    /// Smallest accepted value
    pub lower: f64,
    /// Largest accepted value
    pub upper: f64,
}

impl IqrBounds {
    /// Fences for an ascending window; `None` when the window is empty
    pub fn from_sorted(sorted: &[f64], upper_multiplier: f64, lower_multiplier: f64) -> Option<Self> {
        let (q1, q3) = quartiles(sorted)?;
        let iqr = q3 - q1;

        Some(Self {
            q1,
            q3,
            lower: q1 - lower_multiplier * iqr,
            upper: q3 + upper_multiplier * iqr,
        })
    }

    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Check if a value lies within the fences (inclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}
