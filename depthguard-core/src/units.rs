//! Unit normalization for filter configurations
//!
//! Preset thresholds are written in inches. When a station reports in
//! centimeters the depth-valued fields are rescaled before filtering so they
//! are in the same unit as the incoming values. Window size, multipliers and
//! flags are unit-free and pass through.

use serde::{Deserialize, Serialize};

use crate::{config::FilterConfig, constants::units::CM_PER_INCH};

/// Unit system of incoming depth values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Units {
    /// Inches (native unit of the presets)
    #[default]
    Imperial,
    /// Centimeters
    Metric,
}

impl Units {
    /// Map an `is_metric` flag
    pub fn from_metric_flag(is_metric: bool) -> Self {
        if is_metric {
            Self::Metric
        } else {
            Self::Imperial
        }
    }

    /// Check for metric units
    pub fn is_metric(self) -> bool {
        matches!(self, Self::Metric)
    }

    /// Factor converting an inch-based depth into this unit
    pub fn depth_factor(self) -> f64 {
        match self {
            Self::Imperial => 1.0,
            Self::Metric => CM_PER_INCH,
        }
    }
}

/// Configuration equivalent to `config` for values reported in `units`
pub fn normalize(config: &FilterConfig, units: Units) -> FilterConfig {
    match units {
        Units::Imperial => *config,
        Units::Metric => config.scale_depths(units.depth_factor()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_scales_depth_fields_exactly() {
        let config = FilterConfig::SNOW_DEPTH;
        let metric = normalize(&config, Units::Metric);

        assert_eq!(metric.threshold(), 0.0 * 2.54);
        assert_eq!(metric.max_positive_change(), 4.0 * 2.54);
        assert_eq!(metric.max_negative_change(), 10.0 * 2.54);
    }

    #[test]
    fn metric_leaves_unit_free_fields_alone() {
        let config = FilterConfig::SNOW_DEPTH_24H;
        let metric = normalize(&config, Units::Metric);

        assert_eq!(metric.window_size(), config.window_size());
        assert_eq!(metric.upper_iqr_multiplier(), config.upper_iqr_multiplier());
        assert_eq!(metric.lower_iqr_multiplier(), config.lower_iqr_multiplier());
        assert_eq!(metric.apply_identical_check(), config.apply_identical_check());
    }

    #[test]
    fn imperial_is_identity() {
        let config = FilterConfig::SNOW_DEPTH_24H;
        assert_eq!(normalize(&config, Units::Imperial), config);
    }

    #[test]
    fn metric_flag_mapping() {
        assert_eq!(Units::from_metric_flag(true), Units::Metric);
        assert_eq!(Units::from_metric_flag(false), Units::Imperial);
        assert!(Units::Metric.is_metric());
        assert_eq!(Units::Metric.depth_factor(), CM_PER_INCH);
    }
}
