//! JSON row I/O
//!
//! Rows travel as a JSON array of objects, one object per observation,
//! the shape produced by a `records`-oriented table export.

use std::io::{Read, Write};

use crate::{errors::ObservationResult, observation::Observation};

/// Read a JSON array of observations
pub fn read_observations<R: Read>(reader: R) -> ObservationResult<Vec<Observation>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Write observations as a JSON array
pub fn write_observations<W: Write>(writer: W, rows: &[Observation]) -> ObservationResult<()> {
    serde_json::to_writer(writer, rows)?;
    Ok(())
}
