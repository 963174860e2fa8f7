//! Core types and traits for the filter engine
//!
//! These define the seam between callers and detectors.
//! Keep them simple - a detector is a pure function of its input.

use serde::{Deserialize, Serialize};

/// Single depth measurement as handed over by the caller
///
/// `value` is `None` when the sensor reported nothing. The timestamp stays
/// raw text: it is parsed for ordering and echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// ISO-8601 date/time text
    pub timestamp: String,

    /// Measured depth, if any
    ///
    /// NaN and infinite readings are treated as absent and come back as `None`.
    pub value: Option<f64>,

    /// Station or sensor identifier (optional)
    #[serde(default)]
    pub source_id: Option<String>,
}

impl Sample {
    /// Create a sample with no source identifier
    pub fn new(timestamp: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            timestamp: timestamp.into(),
            value,
            source_id: None,
        }
    }

    /// Attach a source identifier
    pub fn with_source(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = Some(source_id.into());
        self
    }

    /// Value usable for statistics: present and finite
    pub fn usable_value(&self) -> Option<f64> {
        self.value.filter(|v| v.is_valid())
    }
}

/// Detector output for one sample
///
/// `value` is `None` when the sample was rejected or had nothing to evaluate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredSample {
    /// Timestamp echoed from the input sample
    pub timestamp: String,

    /// Accepted value, unchanged
    pub value: Option<f64>,
}

/// Core detector trait - implement this for each outlier strategy
pub trait OutlierDetector {
    /// Evaluate a chronologically sorted series
    ///
    /// Output has the same length and order as the input.
    fn detect(&self, samples: &[Sample]) -> Vec<FilteredSample>;
}

/// Trait for values that can take part in window statistics
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_values_are_unusable() {
        assert_eq!(Sample::new("2024-01-01", Some(3.0)).usable_value(), Some(3.0));
        assert_eq!(Sample::new("2024-01-01", Some(f64::NAN)).usable_value(), None);
        assert_eq!(Sample::new("2024-01-01", Some(f64::INFINITY)).usable_value(), None);
        assert_eq!(Sample::new("2024-01-01", None).usable_value(), None);
    }

    #[test]
    fn source_is_optional_in_json() {
        let sample: Sample =
            serde_json::from_str(r#"{"timestamp":"2024-01-01T00:00:00","value":null}"#).unwrap();
        assert_eq!(sample.source_id, None);
        assert_eq!(sample.value, None);
    }
}
