//! Constants for DepthGuard Core
//!
//! All numeric values used by the filter engine are defined here with the
//! reasoning behind them, instead of as magic numbers in the algorithm code.
//!
//! ## Organization
//!
//! - **Units**: unit conversion factors
//! - **Presets**: parameter values of the built-in measurement presets
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Keep units in the constant name (`_IN`, `_CM`)
//! 3. Group related constants together

/// Unit conversion factors.
pub mod units;

/// Parameter values for the snow depth presets.
pub mod presets;

pub use units::CM_PER_INCH;

pub use presets::{DEFAULT_IQR_MULTIPLIER, DEFAULT_WINDOW_SIZE};
