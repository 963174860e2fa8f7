//! Per-station filtering
//!
//! A query may return rows for several stations interleaved. Windows must
//! never mix stations, so rows are grouped first and each station's series
//! is filtered on its own.

use std::collections::BTreeMap;

use depthguard_core::Units;

use crate::{
    errors::ObservationResult,
    merge::{filter_observations_with, ColumnConfigs},
    observation::Observation,
};

/// Rows grouped by station, input order kept within each group
pub fn group_by_station(rows: &[Observation]) -> BTreeMap<String, Vec<Observation>> {
    let mut stations: BTreeMap<String, Vec<Observation>> = BTreeMap::new();
    for row in rows {
        stations
            .entry(row.station().into_owned())
            .or_default()
            .push(row.clone());
    }
    stations
}

/// Filter every station independently
pub fn filter_stations(
    rows: &[Observation],
    configs: &ColumnConfigs,
    units: Units,
) -> ObservationResult<BTreeMap<String, Vec<Observation>>> {
    group_by_station(rows)
        .into_iter()
        .map(|(station, rows)| {
            log::debug!("filtering station {} ({} rows)", station, rows.len());
            let filtered = filter_observations_with(&rows, configs, units)?;
            Ok((station, filtered))
        })
        .collect()
}
