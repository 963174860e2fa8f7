//! Station observation adapter for DepthGuard
//!
//! Bridges tabular station data and the filter engine:
//!
//! 1. each row's `snow_depth` and `snow_depth_24h` columns become two
//!    independent sample series
//! 2. each series is filtered with its own preset (or a custom config)
//! 3. filtered values are merged back into the rows by timestamp
//!
//! ```rust
//! use depthguard_observations::{filter_observations, Observation};
//! use depthguard_core::Units;
//!
//! let rows: Vec<Observation> = (0..6)
//!     .map(|hour| {
//!         let depth = if hour == 3 { 140.0 } else { 52.0 };
//!         Observation::new(format!("2024-01-15T{:02}:00:00", hour))
//!             .with_station("HMDW1")
//!             .with_snow_depth(Some(depth))
//!             .with_snow_depth_24h(Some(1.0))
//!     })
//!     .collect();
//!
//! let filtered = filter_observations(&rows, Units::Imperial)?;
//! assert_eq!(filtered[3].snow_depth, None);
//! assert_eq!(filtered[2].snow_depth, Some(52.0));
//! # Ok::<(), depthguard_observations::ObservationError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod errors;
pub mod io;
pub mod merge;
pub mod observation;
pub mod stations;

pub use errors::{ObservationError, ObservationResult};
pub use io::{read_observations, write_observations};
pub use merge::{filter_observations, filter_observations_with, ColumnConfigs};
pub use observation::{to_samples, Observation, StationId, DEFAULT_STATION};
pub use stations::{filter_stations, group_by_station};
