//! Sliding-window IQR outlier detector
//!
//! Each sample is judged against fences built from its own neighborhood:
//! the present values in a centered window, sorted, with index-based
//! quartiles. Values outside `[q1 - lower * iqr, q3 + upper * iqr]` are
//! nulled; everything else passes through unchanged (no clamping, no
//! smoothing).
//!
//! A centered window sees both sides of a sample, so a genuine step in depth
//! (fresh snowfall) gathers support from the readings after it, while a
//! one-off spike has none.

use crate::{
    config::FilterConfig,
    traits::{FilteredSample, OutlierDetector, Sample},
};

use super::utils::{self, IqrBounds};

/// Outcome for one sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// Value within the fences, kept
    Accepted(f64),
    /// Value outside the fences, nulled
    Rejected {
        /// The offending value
        value: f64,
        /// Fences it fell outside of
        bounds: IqrBounds,
    },
    /// Sample had no usable value of its own
    Missing,
    /// Window held no usable values at all
    NoData,
}

impl Verdict {
    /// Value to emit for this verdict
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Accepted(value) => Some(*value),
            _ => None,
        }
    }
}

/// Centered-window IQR detector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlidingWindowDetector {
    window_size: usize,
    upper_multiplier: f64,
    lower_multiplier: f64,
}

impl SlidingWindowDetector {
    /// Create a detector
    ///
    /// Parameters are taken as given; validate them through
    /// [`FilterConfig`] when they come from outside.
    pub fn new(window_size: usize, upper_multiplier: f64, lower_multiplier: f64) -> Self {
        Self {
            window_size,
            upper_multiplier,
            lower_multiplier,
        }
    }

    /// Detector driven by a configuration's window size and multipliers
    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(
            config.window_size(),
            config.upper_iqr_multiplier(),
            config.lower_iqr_multiplier(),
        )
    }

    /// Samples per full window
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Fences for the window around `index`, `None` if it holds no usable values
    pub fn bounds_at(&self, samples: &[Sample], index: usize) -> Option<IqrBounds> {
        let range = utils::window_range(index, samples.len(), self.window_size);

        let mut window: Vec<f64> = samples[range]
            .iter()
            .filter_map(Sample::usable_value)
            .collect();
        window.sort_by(f64::total_cmp);

        IqrBounds::from_sorted(&window, self.upper_multiplier, self.lower_multiplier)
    }

    /// Judge one sample
    pub fn judge(&self, samples: &[Sample], index: usize) -> Verdict {
        let Some(bounds) = self.bounds_at(samples, index) else {
            return Verdict::NoData;
        };

        match samples[index].usable_value() {
            None => Verdict::Missing,
            Some(value) if bounds.contains(value) => Verdict::Accepted(value),
            Some(value) => {
                log::trace!(
                    "rejecting {} at {}: outside [{}, {}]",
                    value,
                    samples[index].timestamp,
                    bounds.lower,
                    bounds.upper
                );
                Verdict::Rejected { value, bounds }
            }
        }
    }

    /// Verdict for every sample, in input order
    pub fn verdicts(&self, samples: &[Sample]) -> Vec<Verdict> {
        (0..samples.len())
            .map(|index| self.judge(samples, index))
            .collect()
    }

    /// Filtered output together with the verdict behind each entry
    pub fn detect_with_verdicts(&self, samples: &[Sample]) -> Vec<(FilteredSample, Verdict)> {
        samples
            .iter()
            .zip(self.verdicts(samples))
            .map(|(sample, verdict)| {
                let filtered = FilteredSample {
                    timestamp: sample.timestamp.clone(),
                    value: verdict.value(),
                };
                (filtered, verdict)
            })
            .collect()
    }
}

impl OutlierDetector for SlidingWindowDetector {
    fn detect(&self, samples: &[Sample]) -> Vec<FilteredSample> {
        self.detect_with_verdicts(samples)
            .into_iter()
            .map(|(filtered, _)| filtered)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hourly(values: &[Option<f64>]) -> Vec<Sample> {
        values
            .iter()
            .enumerate()
            .map(|(hour, value)| Sample::new(format!("2024-01-15T{:02}:00:00", hour), *value))
            .collect()
    }

    fn values(output: &[FilteredSample]) -> Vec<Option<f64>> {
        output.iter().map(|s| s.value).collect()
    }

    #[test]
    fn single_spike_rejected() {
        let samples = hourly(&[
            Some(10.0),
            Some(10.0),
            Some(10.0),
            Some(100.0),
            Some(10.0),
            Some(10.0),
            Some(10.0),
        ]);
        let detector = SlidingWindowDetector::new(5, 1.0, 1.0);

        let output = detector.detect(&samples);
        assert_eq!(
            values(&output),
            vec![
                Some(10.0),
                Some(10.0),
                Some(10.0),
                None,
                Some(10.0),
                Some(10.0),
                Some(10.0),
            ]
        );
    }

    #[test]
    fn all_absent_window_yields_absent() {
        let samples = hourly(&[None, None, None]);
        let detector = SlidingWindowDetector::new(3, 1.0, 1.0);

        assert_eq!(detector.verdicts(&samples), vec![Verdict::NoData; 3]);
        assert_eq!(values(&detector.detect(&samples)), vec![None, None, None]);
    }

    #[test]
    fn missing_sample_stays_missing() {
        let samples = hourly(&[Some(5.0), None, Some(5.0)]);
        let detector = SlidingWindowDetector::new(3, 1.0, 1.0);

        assert_eq!(detector.judge(&samples, 1), Verdict::Missing);
        assert_eq!(values(&detector.detect(&samples)), vec![Some(5.0), None, Some(5.0)]);
    }

    #[test]
    fn nan_treated_as_missing() {
        let samples = hourly(&[Some(5.0), Some(f64::NAN), Some(5.0)]);
        let detector = SlidingWindowDetector::new(3, 1.0, 1.0);

        assert_eq!(detector.judge(&samples, 1), Verdict::Missing);
        assert_eq!(detector.judge(&samples, 0), Verdict::Accepted(5.0));
    }

    #[test]
    fn edge_windows_are_shorter() {
        // window 3 over 5 samples: sample 0 sees only [0, 1]
        // sorted [1, 9]: q1 = 1, q3 = 9, fences [-7, 17]
        let samples = hourly(&[Some(9.0), Some(1.0), Some(1.0), Some(1.0), Some(1.0)]);
        let detector = SlidingWindowDetector::new(3, 1.0, 1.0);

        let bounds = detector.bounds_at(&samples, 0).unwrap();
        assert_eq!((bounds.q1, bounds.q3), (1.0, 9.0));
        assert_eq!(detector.judge(&samples, 0), Verdict::Accepted(9.0));

        // sample 1 sees [0, 1, 2] = sorted [1, 1, 9]: q1 = 1 (idx 0), q3 = 9 (idx 2)
        let bounds = detector.bounds_at(&samples, 1).unwrap();
        assert_eq!((bounds.q1, bounds.q3), (1.0, 9.0));
    }

    #[test]
    fn oversized_window_is_global() {
        let samples = hourly(&[Some(1.0), Some(2.0), Some(3.0)]);
        let detector = SlidingWindowDetector::new(50, 0.0, 0.0);

        let first = detector.bounds_at(&samples, 0).unwrap();
        let last = detector.bounds_at(&samples, 2).unwrap();
        assert_eq!(first, last);
        // len 3: q1 = sorted[0], q3 = sorted[2]
        assert_eq!((first.lower, first.upper), (1.0, 3.0));
    }

    #[test]
    fn upper_and_lower_fences_are_independent() {
        // window of everything: sorted [0, 10, 10, 10, 10, 10, 20, 40]
        // q1 = sorted[2] = 10, q3 = sorted[6] = 20, iqr = 10
        let samples = hourly(&[
            Some(10.0),
            Some(0.0),
            Some(10.0),
            Some(20.0),
            Some(10.0),
            Some(40.0),
            Some(10.0),
            Some(10.0),
        ]);

        // upper 1 → 30, lower 2 → -10
        let depth_like = SlidingWindowDetector::new(100, 1.0, 2.0);
        let output = values(&depth_like.detect(&samples));
        assert_eq!(output[1], Some(0.0));
        assert_eq!(output[5], None);

        // upper 2 → 40, lower 0 → 10
        let delta_like = SlidingWindowDetector::new(100, 2.0, 0.0);
        let output = values(&delta_like.detect(&samples));
        assert_eq!(output[1], None);
        assert_eq!(output[5], Some(40.0));
    }

    #[test]
    fn rejection_carries_bounds() {
        let samples = hourly(&[Some(1.0), Some(1.0), Some(50.0), Some(1.0), Some(1.0)]);
        let detector = SlidingWindowDetector::new(5, 1.0, 1.0);

        match detector.judge(&samples, 2) {
            Verdict::Rejected { value, bounds } => {
                assert_eq!(value, 50.0);
                assert_eq!((bounds.lower, bounds.upper), (1.0, 1.0));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn from_config_uses_window_and_multipliers() {
        let detector = SlidingWindowDetector::from_config(&FilterConfig::SNOW_DEPTH_24H);
        assert_eq!(detector, SlidingWindowDetector::new(24, 2.0, 1.0));
    }

    #[test]
    fn empty_series() {
        let detector = SlidingWindowDetector::new(5, 1.0, 1.0);
        assert!(detector.detect(&[]).is_empty());
    }
}
