//! Pipeline orchestration: normalize → sort → detect
//!
//! [`filter_outliers`] is the entry point for one-off calls. [`OutlierFilter`]
//! holds a normalized configuration for callers that filter many series
//! with the same parameters (one per station, say).
//!
//! ```rust
//! use depthguard_core::{filter_outliers, FilterConfig, Sample, Units};
//!
//! // newest first, as the database hands it over
//! let samples = vec![
//!     Sample::new("2024-01-15T02:00:00", Some(30.2)),
//!     Sample::new("2024-01-15T01:00:00", Some(30.1)),
//!     Sample::new("2024-01-15T00:00:00", Some(30.0)),
//! ];
//!
//! let filtered = filter_outliers(&samples, &FilterConfig::SNOW_DEPTH, Units::Imperial)?;
//! assert_eq!(filtered.len(), 3);
//! assert_eq!(filtered[0].timestamp, "2024-01-15T00:00:00");
//! # Ok::<(), depthguard_core::FilterError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    config::{FilterConfig, MeasurementKind},
    detector::{SlidingWindowDetector, Verdict},
    errors::FilterResult,
    time,
    traits::{FilteredSample, Sample},
    units::{self, Units},
};

/// Filter a depth series
///
/// Returns a new sequence in chronological order, same length as the
/// input, with outliers nulled. Empty input yields empty output.
///
/// # Errors
///
/// [`crate::FilterError::TimestampParse`] or
/// [`crate::FilterError::MixedTimezones`] if the series cannot be ordered.
pub fn filter_outliers(
    samples: &[Sample],
    config: &FilterConfig,
    units: Units,
) -> FilterResult<Vec<FilteredSample>> {
    OutlierFilter::new(config, units).filter(samples)
}

/// Verdict counts for one filter run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSummary {
    /// Samples evaluated
    pub total: usize,
    /// Values kept
    pub accepted: usize,
    /// Present values nulled as outliers
    pub rejected: usize,
    /// Samples with nothing to keep: no value of their own, or no data in the window
    pub missing: usize,
}

impl FilterSummary {
    fn record(&mut self, verdict: &Verdict) {
        self.total += 1;
        match verdict {
            Verdict::Accepted(_) => self.accepted += 1,
            Verdict::Rejected { .. } => self.rejected += 1,
            Verdict::Missing | Verdict::NoData => self.missing += 1,
        }
    }

    /// Fraction of present values that were rejected
    pub fn rejection_rate(&self) -> f64 {
        let judged = self.accepted + self.rejected;
        if judged == 0 {
            return 0.0;
        }
        self.rejected as f64 / judged as f64
    }
}

/// Reusable filter for one measurement stream
///
/// Immutable once built; safe to share between threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierFilter {
    config: FilterConfig,
    units: Units,
}

impl OutlierFilter {
    /// Filter for values reported in `units`
    pub fn new(config: &FilterConfig, units: Units) -> Self {
        Self {
            config: units::normalize(config, units),
            units,
        }
    }

    /// Filter using the preset for `kind`
    pub fn for_kind(kind: MeasurementKind, units: Units) -> Self {
        Self::new(&kind.preset(), units)
    }

    /// Configuration after unit normalization
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Units the filter expects
    pub fn units(&self) -> Units {
        self.units
    }

    /// Filter a series
    pub fn filter(&self, samples: &[Sample]) -> FilterResult<Vec<FilteredSample>> {
        self.filter_with_summary(samples).map(|(filtered, _)| filtered)
    }

    /// Filter a series and count the verdicts
    pub fn filter_with_summary(
        &self,
        samples: &[Sample],
    ) -> FilterResult<(Vec<FilteredSample>, FilterSummary)> {
        if samples.is_empty() {
            return Ok((Vec::new(), FilterSummary::default()));
        }

        log::debug!(
            "filtering {} samples (window {}, units {:?})",
            samples.len(),
            self.config.window_size(),
            self.units
        );

        let sorted = time::sort_chronologically(samples)?;
        let detector = SlidingWindowDetector::from_config(&self.config);

        let mut summary = FilterSummary::default();
        let filtered: Vec<FilteredSample> = detector
            .detect_with_verdicts(&sorted)
            .into_iter()
            .map(|(filtered, verdict)| {
                summary.record(&verdict);
                filtered
            })
            .collect();

        log::debug!(
            "kept {} of {} samples ({} rejected, {} missing)",
            summary.accepted,
            summary.total,
            summary.rejected,
            summary.missing
        );

        Ok((filtered, summary))
    }
}
