//! Station observation rows and their conversion into engine samples
//!
//! A row carries both depth columns. Each column becomes its own sample
//! series so the two streams are filtered independently, with their own
//! presets.

use std::{borrow::Cow, collections::BTreeMap, fmt};

use depthguard_core::{MeasurementKind, Sample};
use serde::{Deserialize, Serialize};

/// Source identifier used when a row names no station
pub const DEFAULT_STATION: &str = "default";

/// Station identifier as it appears in the source table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StationId {
    /// Textual identifier (`"HMDW1"`)
    Text(String),
    /// Numeric identifier (`42`)
    Number(i64),
}

impl StationId {
    /// Identifier as text, used as the grouping and source key
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Number(number) => Cow::Owned(number.to_string()),
        }
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for StationId {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for StationId {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for StationId {
    fn from(number: i64) -> Self {
        Self::Number(number)
    }
}

/// One row of station data
///
/// Columns other than the ones named here are kept in `extra` and written
/// back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// ISO-8601 observation time
    pub date_time: String,

    /// Station identifier, written back in the form it was read
    #[serde(default)]
    pub station_id: Option<StationId>,

    /// Instantaneous snow depth
    #[serde(default)]
    pub snow_depth: Option<f64>,

    /// Snow depth change over the previous 24 hours
    #[serde(default)]
    pub snow_depth_24h: Option<f64>,

    /// Remaining columns, passed through
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Observation {
    /// Row with no depth values and no extra columns
    pub fn new(date_time: impl Into<String>) -> Self {
        Self {
            date_time: date_time.into(),
            station_id: None,
            snow_depth: None,
            snow_depth_24h: None,
            extra: BTreeMap::new(),
        }
    }

    /// Set the station identifier
    pub fn with_station(mut self, station_id: impl Into<StationId>) -> Self {
        self.station_id = Some(station_id.into());
        self
    }

    /// Set the instantaneous depth
    pub fn with_snow_depth(mut self, depth: Option<f64>) -> Self {
        self.snow_depth = depth;
        self
    }

    /// Set the 24-hour change
    pub fn with_snow_depth_24h(mut self, delta: Option<f64>) -> Self {
        self.snow_depth_24h = delta;
        self
    }

    /// Value of the column for `kind`
    pub fn value(&self, kind: MeasurementKind) -> Option<f64> {
        match kind {
            MeasurementKind::SnowDepth => self.snow_depth,
            MeasurementKind::SnowDepth24h => self.snow_depth_24h,
        }
    }

    /// Replace the column for `kind`
    pub fn set_value(&mut self, kind: MeasurementKind, value: Option<f64>) {
        match kind {
            MeasurementKind::SnowDepth => self.snow_depth = value,
            MeasurementKind::SnowDepth24h => self.snow_depth_24h = value,
        }
    }

    /// Station identifier, or [`DEFAULT_STATION`]
    pub fn station(&self) -> Cow<'_, str> {
        self.station_id
            .as_ref()
            .map_or(Cow::Borrowed(DEFAULT_STATION), StationId::as_text)
    }
}

/// One sample per row, keyed by the column for `kind`
pub fn to_samples(rows: &[Observation], kind: MeasurementKind) -> Vec<Sample> {
    rows.iter()
        .map(|row| Sample::new(row.date_time.clone(), row.value(kind)).with_source(row.station()))
        .collect()
}
