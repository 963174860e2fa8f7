//! Unit Conversion Factors
//!
//! Preset thresholds are written in inches, the native unit of most
//! snow telemetry networks in the US. Metric stations report centimeters.

/// Centimeters per inch.
///
/// Exact by definition (international inch, 1959).
pub const CM_PER_INCH: f64 = 2.54;
