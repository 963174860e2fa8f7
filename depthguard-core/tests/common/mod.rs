//! Common test utilities for integration tests
//!
//! Provides:
//! - Hourly series builders
//! - Realistic snow depth generators with injected glitches
//! - Assertion helpers for filter output

#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use depthguard_core::{FilteredSample, Sample};

pub mod generators;

/// Start of every generated series
pub fn series_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid start date")
}

/// ISO-8601 timestamp `hours` after the series start
pub fn hour_stamp(hours: i64) -> String {
    (series_start() + Duration::hours(hours))
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

/// One sample per hour, starting at the series start
pub fn hourly(values: &[Option<f64>]) -> Vec<Sample> {
    values
        .iter()
        .enumerate()
        .map(|(hour, value)| Sample::new(hour_stamp(hour as i64), *value))
        .collect()
}

/// Hourly series with every value present
pub fn hourly_present(values: &[f64]) -> Vec<Sample> {
    values
        .iter()
        .enumerate()
        .map(|(hour, value)| Sample::new(hour_stamp(hour as i64), Some(*value)))
        .collect()
}

/// Output values in order
pub fn values(output: &[FilteredSample]) -> Vec<Option<f64>> {
    output.iter().map(|sample| sample.value).collect()
}

/// Output converted back into samples, for a second pass
pub fn resample(output: &[FilteredSample]) -> Vec<Sample> {
    output
        .iter()
        .map(|sample| Sample::new(sample.timestamp.clone(), sample.value))
        .collect()
}

/// Assert output timestamps never go backwards
pub fn assert_chronological(output: &[FilteredSample]) {
    let parsed: Vec<NaiveDateTime> = output
        .iter()
        .map(|sample| {
            NaiveDateTime::parse_from_str(&sample.timestamp, "%Y-%m-%dT%H:%M:%S")
                .expect("generated timestamp")
        })
        .collect();

    for pair in parsed.windows(2) {
        assert!(pair[0] <= pair[1], "{} after {}", pair[0], pair[1]);
    }
}
