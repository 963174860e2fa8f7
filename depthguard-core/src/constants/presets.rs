//! Snow Depth Preset Values
//!
//! Two streams come off a snow depth sensor and they behave differently:
//!
//! - **Instantaneous depth**: ultrasonic/laser distance readings, prone to
//!   single-sample spikes from blowing snow, birds, and reflections.
//! - **24-hour delta**: depth change over the previous day, which swings
//!   negative during settling and melt much further than it swings positive.
//!
//! All depth values are in inches.

// ===== SHARED =====

/// Window size for both presets (samples).
///
/// 24 hourly samples, one day centered on the evaluated reading.
pub const DEFAULT_WINDOW_SIZE: usize = 24;

/// IQR multiplier used when a custom configuration leaves it unset.
///
/// Tukey's fences.
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

// ===== INSTANTANEOUS DEPTH =====

/// Depth threshold (in).
pub const SNOW_DEPTH_THRESHOLD_IN: f64 = 0.0;

/// Largest plausible hour-over-hour increase (in).
pub const SNOW_DEPTH_MAX_POSITIVE_CHANGE_IN: f64 = 4.0;

/// Largest plausible hour-over-hour decrease (in).
pub const SNOW_DEPTH_MAX_NEGATIVE_CHANGE_IN: f64 = 10.0;

/// Upper fence multiplier. Spikes upward are the common glitch.
pub const SNOW_DEPTH_UPPER_IQR_MULTIPLIER: f64 = 1.0;

/// Lower fence multiplier. Real depth drops (wind scour, melt) are tolerated.
pub const SNOW_DEPTH_LOWER_IQR_MULTIPLIER: f64 = 2.0;

// ===== 24-HOUR DELTA =====

/// Delta threshold (in).
pub const SNOW_DEPTH_24H_THRESHOLD_IN: f64 = -1.0;

/// Largest plausible increase of the delta (in).
pub const SNOW_DEPTH_24H_MAX_POSITIVE_CHANGE_IN: f64 = 4.0;

/// Largest plausible decrease of the delta (in).
pub const SNOW_DEPTH_24H_MAX_NEGATIVE_CHANGE_IN: f64 = 30.0;

/// Upper fence multiplier. Storm days produce large positive deltas.
pub const SNOW_DEPTH_24H_UPPER_IQR_MULTIPLIER: f64 = 2.0;

/// Lower fence multiplier.
pub const SNOW_DEPTH_24H_LOWER_IQR_MULTIPLIER: f64 = 1.0;
