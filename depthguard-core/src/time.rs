//! Timestamp parsing and chronological ordering
//!
//! Window membership is positional: a sample's neighbors are the samples
//! next to it in time order. Input arriving newest-first (the usual database
//! query order) or with duplicates must therefore be sorted before any
//! window is built.
//!
//! Accepted forms:
//! - `2024-01-15`
//! - `2024-01-15T06:00` / `2024-01-15 06:00`
//! - `2024-01-15T06:00:00[.ffffff]` / `2024-01-15 06:00:00[.ffffff]`
//! - any of the timed forms followed by `Z` or a `±HH:MM` offset
//!
//! Naive and offset-aware timestamps cannot be ordered against each other,
//! so a series must use one kind throughout.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

use crate::{
    errors::{FilterError, FilterResult},
    traits::Sample,
};

const AWARE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parsed sample timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedTimestamp {
    /// Wall-clock time with no offset
    Naive(NaiveDateTime),
    /// Instant with a UTC offset
    Aware(DateTime<FixedOffset>),
}

impl ParsedTimestamp {
    /// Check for an offset-aware timestamp
    pub fn is_aware(&self) -> bool {
        matches!(self, Self::Aware(_))
    }

    /// Key ordering timestamps of the same kind
    ///
    /// Aware timestamps order by instant, so they are keyed in UTC.
    fn sort_key(&self) -> NaiveDateTime {
        match self {
            Self::Naive(naive) => *naive,
            Self::Aware(aware) => aware.naive_utc(),
        }
    }
}

/// Parse an ISO-8601 timestamp
pub fn parse_timestamp(raw: &str) -> Option<ParsedTimestamp> {
    if let Ok(aware) = DateTime::parse_from_rfc3339(raw) {
        return Some(ParsedTimestamp::Aware(aware));
    }

    if let Some(aware) = AWARE_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(raw, format).ok())
    {
        return Some(ParsedTimestamp::Aware(aware));
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(ParsedTimestamp::Naive(naive));
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(ParsedTimestamp::Naive)
}

/// Parse every timestamp into a sort key
///
/// Fails on the first unparseable timestamp, or on the first sample whose
/// kind (naive/aware) differs from the first sample's.
fn sort_keys(samples: &[Sample]) -> FilterResult<Vec<NaiveDateTime>> {
    let mut series_is_aware = None;

    samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            let parsed = parse_timestamp(&sample.timestamp).ok_or_else(|| {
                FilterError::TimestampParse {
                    timestamp: sample.timestamp.clone(),
                    index,
                }
            })?;

            match series_is_aware {
                None => series_is_aware = Some(parsed.is_aware()),
                Some(aware) if aware != parsed.is_aware() => {
                    return Err(FilterError::MixedTimezones { index });
                }
                Some(_) => {}
            }

            Ok(parsed.sort_key())
        })
        .collect()
}

/// New sequence sorted ascending by timestamp
///
/// The sort is stable: samples with equal timestamps keep their input order.
pub fn sort_chronologically(samples: &[Sample]) -> FilterResult<Vec<Sample>> {
    let keys = sort_keys(samples)?;

    let mut keyed: Vec<(NaiveDateTime, &Sample)> = keys.into_iter().zip(samples).collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(keyed.into_iter().map(|(_, sample)| sample.clone()).collect())
}
