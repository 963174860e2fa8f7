//! Filter configuration and the built-in measurement presets
//!
//! A [`FilterConfig`] is an immutable parameter bundle, one per measurement
//! stream. Only `window_size` and the two IQR multipliers drive rejection;
//! the remaining fields are carried (and unit-scaled) for callers that read
//! them, but the windowed detector never consults them.
//!
//! ```rust
//! use depthguard_core::{FilterConfig, MeasurementKind};
//!
//! // Built-in preset
//! let depth = FilterConfig::SNOW_DEPTH;
//! assert_eq!(depth.window_size(), 24);
//!
//! // Same thing, by stream name
//! let kind: MeasurementKind = "snow_depth_24h".parse()?;
//! assert_eq!(kind.preset(), FilterConfig::SNOW_DEPTH_24H);
//!
//! // Custom configuration - invariants checked at build time
//! let hourly = FilterConfig::builder()
//!     .window_size(12)
//!     .upper_iqr_multiplier(1.0)
//!     .lower_iqr_multiplier(3.0)
//!     .build()?;
//! assert_eq!(hourly.lower_iqr_multiplier(), 3.0);
//! # Ok::<(), depthguard_core::FilterError>(())
//! ```

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    constants::presets::*,
    errors::{FilterError, FilterResult},
    traits::Validatable,
};

/// Immutable filter parameters for one measurement stream
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFilterConfig")]
pub struct FilterConfig {
    threshold: f64,
    max_positive_change: f64,
    max_negative_change: f64,
    window_size: usize,
    upper_iqr_multiplier: f64,
    lower_iqr_multiplier: f64,
    apply_identical_check: bool,
}

impl FilterConfig {
    /// Instantaneous snow depth (inches)
    pub const SNOW_DEPTH: Self = Self {
        threshold: SNOW_DEPTH_THRESHOLD_IN,
        max_positive_change: SNOW_DEPTH_MAX_POSITIVE_CHANGE_IN,
        max_negative_change: SNOW_DEPTH_MAX_NEGATIVE_CHANGE_IN,
        window_size: DEFAULT_WINDOW_SIZE,
        upper_iqr_multiplier: SNOW_DEPTH_UPPER_IQR_MULTIPLIER,
        lower_iqr_multiplier: SNOW_DEPTH_LOWER_IQR_MULTIPLIER,
        apply_identical_check: true,
    };

    /// 24-hour snow depth change (inches)
    pub const SNOW_DEPTH_24H: Self = Self {
        threshold: SNOW_DEPTH_24H_THRESHOLD_IN,
        max_positive_change: SNOW_DEPTH_24H_MAX_POSITIVE_CHANGE_IN,
        max_negative_change: SNOW_DEPTH_24H_MAX_NEGATIVE_CHANGE_IN,
        window_size: DEFAULT_WINDOW_SIZE,
        upper_iqr_multiplier: SNOW_DEPTH_24H_UPPER_IQR_MULTIPLIER,
        lower_iqr_multiplier: SNOW_DEPTH_24H_LOWER_IQR_MULTIPLIER,
        apply_identical_check: false,
    };

    /// Start a custom configuration
    pub fn builder() -> FilterConfigBuilder {
        FilterConfigBuilder::new()
    }

    /// Preset for a measurement stream
    pub fn from_preset(kind: MeasurementKind) -> Self {
        kind.preset()
    }

    /// Decode a JSON configuration document, checking invariants
    ///
    /// Omitted multipliers default to 1.5 and an omitted
    /// `apply_identical_check` defaults to `true`.
    pub fn from_json(json: &str) -> FilterResult<Self> {
        let raw: RawFilterConfig = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Check structural invariants
    pub fn validate(&self) -> FilterResult<()> {
        if self.window_size == 0 {
            return Err(FilterError::ConfigInvariant {
                field: "window_size",
                reason: "must be greater than zero",
            });
        }
        check_multiplier("upper_iqr_multiplier", self.upper_iqr_multiplier)?;
        check_multiplier("lower_iqr_multiplier", self.lower_iqr_multiplier)
    }

    /// Depth threshold (not used by the windowed detector)
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Largest plausible increase (not used by the windowed detector)
    pub fn max_positive_change(&self) -> f64 {
        self.max_positive_change
    }

    /// Largest plausible decrease (not used by the windowed detector)
    pub fn max_negative_change(&self) -> f64 {
        self.max_negative_change
    }

    /// Number of samples in a full centered window
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Multiplier applied to the IQR above the third quartile
    pub fn upper_iqr_multiplier(&self) -> f64 {
        self.upper_iqr_multiplier
    }

    /// Multiplier applied to the IQR below the first quartile
    pub fn lower_iqr_multiplier(&self) -> f64 {
        self.lower_iqr_multiplier
    }

    /// Whether runs of identical readings should be checked (not used by the windowed detector)
    pub fn apply_identical_check(&self) -> bool {
        self.apply_identical_check
    }

    /// Copy with the depth-valued fields multiplied by `factor`
    pub(crate) fn scale_depths(self, factor: f64) -> Self {
        Self {
            threshold: self.threshold * factor,
            max_positive_change: self.max_positive_change * factor,
            max_negative_change: self.max_negative_change * factor,
            ..self
        }
    }
}

fn check_multiplier(field: &'static str, value: f64) -> FilterResult<()> {
    if !value.is_valid() {
        Err(FilterError::ConfigInvariant {
            field,
            reason: "must be a finite number",
        })
    } else if value < 0.0 {
        Err(FilterError::ConfigInvariant {
            field,
            reason: "must not be negative",
        })
    } else {
        Ok(())
    }
}

/// Builder for custom configurations
///
/// Unset fields fall back to: zero for the depth-valued fields, a 24-sample
/// window, 1.5 for both multipliers, identical check on.
#[derive(Debug, Clone)]
pub struct FilterConfigBuilder {
    config: FilterConfig,
    lenient: bool,
}

impl Default for FilterConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterConfigBuilder {
    /// Builder with default values
    pub fn new() -> Self {
        Self {
            config: FilterConfig {
                threshold: 0.0,
                max_positive_change: 0.0,
                max_negative_change: 0.0,
                window_size: DEFAULT_WINDOW_SIZE,
                upper_iqr_multiplier: DEFAULT_IQR_MULTIPLIER,
                lower_iqr_multiplier: DEFAULT_IQR_MULTIPLIER,
                apply_identical_check: true,
            },
            lenient: false,
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: FilterConfig) -> Self {
        Self {
            config,
            lenient: false,
        }
    }

    /// Set the depth threshold
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Set the largest plausible increase
    pub fn max_positive_change(mut self, change: f64) -> Self {
        self.config.max_positive_change = change;
        self
    }

    /// Set the largest plausible decrease
    pub fn max_negative_change(mut self, change: f64) -> Self {
        self.config.max_negative_change = change;
        self
    }

    /// Set the window size in samples
    pub fn window_size(mut self, window_size: usize) -> Self {
        self.config.window_size = window_size;
        self
    }

    /// Set the upper IQR multiplier
    pub fn upper_iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.config.upper_iqr_multiplier = multiplier;
        self
    }

    /// Set the lower IQR multiplier
    pub fn lower_iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.config.lower_iqr_multiplier = multiplier;
        self
    }

    /// Set the identical-run check flag
    pub fn apply_identical_check(mut self, enabled: bool) -> Self {
        self.config.apply_identical_check = enabled;
        self
    }

    /// Skip invariant checks
    ///
    /// For parity runs against historical output only. A zero window then
    /// evaluates every sample against itself alone, and negative multipliers
    /// shrink the fences inside the quartiles.
    pub fn lenient(mut self) -> Self {
        self.lenient = true;
        self
    }

    /// Finish the configuration
    pub fn build(self) -> FilterResult<FilterConfig> {
        match self.config.validate() {
            Ok(()) => Ok(self.config),
            Err(err) if self.lenient => {
                log::warn!("accepting invalid filter configuration in lenient mode: {}", err);
                Ok(self.config)
            }
            Err(err) => Err(err),
        }
    }
}

/// Wire shape of a configuration document
#[derive(Debug, Deserialize)]
struct RawFilterConfig {
    threshold: f64,
    max_positive_change: f64,
    max_negative_change: f64,
    window_size: i64,
    #[serde(default = "default_iqr_multiplier")]
    upper_iqr_multiplier: f64,
    #[serde(default = "default_iqr_multiplier")]
    lower_iqr_multiplier: f64,
    #[serde(default = "default_identical_check")]
    apply_identical_check: bool,
}

fn default_iqr_multiplier() -> f64 {
    DEFAULT_IQR_MULTIPLIER
}

fn default_identical_check() -> bool {
    true
}

impl TryFrom<RawFilterConfig> for FilterConfig {
    type Error = FilterError;

    fn try_from(raw: RawFilterConfig) -> FilterResult<Self> {
        let window_size = usize::try_from(raw.window_size)
            .ok()
            .filter(|size| *size > 0)
            .ok_or(FilterError::ConfigInvariant {
                field: "window_size",
                reason: "must be greater than zero",
            })?;

        FilterConfigBuilder::new()
            .threshold(raw.threshold)
            .max_positive_change(raw.max_positive_change)
            .max_negative_change(raw.max_negative_change)
            .window_size(window_size)
            .upper_iqr_multiplier(raw.upper_iqr_multiplier)
            .lower_iqr_multiplier(raw.lower_iqr_multiplier)
            .apply_identical_check(raw.apply_identical_check)
            .build()
    }
}

/// The two depth streams a snow station reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MeasurementKind {
    /// Instantaneous snow depth
    #[serde(rename = "snow_depth")]
    SnowDepth,
    /// Snow depth change over the previous 24 hours
    #[serde(rename = "snow_depth_24h")]
    SnowDepth24h,
}

impl MeasurementKind {
    /// Both streams, in column order
    pub const ALL: [Self; 2] = [Self::SnowDepth, Self::SnowDepth24h];

    /// Built-in configuration for this stream
    pub fn preset(self) -> FilterConfig {
        match self {
            Self::SnowDepth => FilterConfig::SNOW_DEPTH,
            Self::SnowDepth24h => FilterConfig::SNOW_DEPTH_24H,
        }
    }

    /// Column name used by station tables
    pub fn column(self) -> &'static str {
        match self {
            Self::SnowDepth => "snow_depth",
            Self::SnowDepth24h => "snow_depth_24h",
        }
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for MeasurementKind {
    type Err = FilterError;

    fn from_str(s: &str) -> FilterResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.column() == s)
            .ok_or(FilterError::ConfigInvariant {
                field: "measurement_kind",
                reason: "expected `snow_depth` or `snow_depth_24h`",
            })
    }
}
