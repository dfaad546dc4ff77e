//! CSV place loader
//!
//! Reads rows of (name, latitude, longitude) with a mandatory header row.
//! The header labels are kept because the report reprints them as column
//! headings. Parsing is strict: a short row, an empty name or a non-numeric
//! coordinate aborts the load with a [`LoadError`] naming the 1-based line,
//! rather than letting garbage flow into the pipeline.
//!
//! Numeric but out-of-range coordinates are accepted as-is; the distance
//! function does not sanitize its inputs.

use crate::error::LoadError;
use crate::place::Place;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use std::path::Path;

/// A loaded place table: header labels plus the place list, in file order
#[derive(Debug, Clone)]
pub struct PlaceTable {
    /// Column labels from the header row
    pub header: Vec<String>,
    /// Places in the order they appear in the file
    pub places: Vec<Place>,
}

/// Raw row shape before coordinate parsing
///
/// Coordinates stay as strings here so a parse failure can be reported with
/// the field name and offending value instead of a generic decode error.
#[derive(Debug, Deserialize)]
struct RawRecord {
    name: String,
    latitude: String,
    longitude: String,
}

/// Load places from a CSV file
pub fn read_places(path: &Path) -> Result<PlaceTable, LoadError> {
    let read_err = |source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(read_err)?;

    let header: Vec<String> = reader
        .headers()
        .map_err(read_err)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut places = Vec::new();
    for result in reader.records() {
        let record = result.map_err(read_err)?;
        places.push(parse_record(&record)?);
    }

    Ok(PlaceTable { header, places })
}

fn parse_record(record: &StringRecord) -> Result<Place, LoadError> {
    let line = record.position().map_or(0, |p| p.line());

    let raw: RawRecord = record.deserialize(None).map_err(|_| LoadError::MalformedRow {
        line,
        found: record.len(),
    })?;

    if raw.name.is_empty() {
        return Err(LoadError::EmptyName { line });
    }

    let latitude = parse_coordinate(&raw.latitude, "latitude", line)?;
    let longitude = parse_coordinate(&raw.longitude, "longitude", line)?;

    Ok(Place {
        name: raw.name,
        latitude,
        longitude,
    })
}

fn parse_coordinate(value: &str, field: &'static str, line: u64) -> Result<f64, LoadError> {
    value.parse().map_err(|_| LoadError::Coordinate {
        line,
        field,
        value: value.to_string(),
    })
}
