//! Filtering both depth columns of a table and merging results back
//!
//! The engine returns its output in chronological order. Rows here keep
//! their original order: each row looks its timestamp up in the filtered
//! series. When several rows share a timestamp, the last filtered entry for
//! that timestamp is used for all of them.

use std::collections::HashMap;

use depthguard_core::{FilterConfig, FilteredSample, MeasurementKind, OutlierFilter, Units};

use crate::{
    errors::ObservationResult,
    observation::{to_samples, Observation},
};

/// Filter configuration per depth column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnConfigs {
    /// Configuration for `snow_depth`
    pub snow_depth: FilterConfig,
    /// Configuration for `snow_depth_24h`
    pub snow_depth_24h: FilterConfig,
}

impl Default for ColumnConfigs {
    fn default() -> Self {
        Self {
            snow_depth: FilterConfig::SNOW_DEPTH,
            snow_depth_24h: FilterConfig::SNOW_DEPTH_24H,
        }
    }
}

impl ColumnConfigs {
    /// Configuration for the column of `kind`
    pub fn config_for(&self, kind: MeasurementKind) -> &FilterConfig {
        match kind {
            MeasurementKind::SnowDepth => &self.snow_depth,
            MeasurementKind::SnowDepth24h => &self.snow_depth_24h,
        }
    }
}

/// Filter both depth columns with the built-in presets
pub fn filter_observations(rows: &[Observation], units: Units) -> ObservationResult<Vec<Observation>> {
    filter_observations_with(rows, &ColumnConfigs::default(), units)
}

/// Filter both depth columns with caller-supplied configurations
pub fn filter_observations_with(
    rows: &[Observation],
    configs: &ColumnConfigs,
    units: Units,
) -> ObservationResult<Vec<Observation>> {
    let mut filtered_rows = rows.to_vec();

    for kind in MeasurementKind::ALL {
        let filter = OutlierFilter::new(configs.config_for(kind), units);
        let (filtered, summary) = filter.filter_with_summary(&to_samples(rows, kind))?;

        log::debug!(
            "{}: {} rejected, {} missing of {} rows",
            kind,
            summary.rejected,
            summary.missing,
            summary.total
        );

        let lookup = by_timestamp(&filtered);
        for row in &mut filtered_rows {
            let value = lookup.get(row.date_time.as_str()).copied().flatten();
            row.set_value(kind, value);
        }
    }

    Ok(filtered_rows)
}

/// Timestamp → filtered value; later entries win
fn by_timestamp(filtered: &[FilteredSample]) -> HashMap<&str, Option<f64>> {
    filtered
        .iter()
        .map(|sample| (sample.timestamp.as_str(), sample.value))
        .collect()
}
