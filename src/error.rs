//! Error taxonomy
//!
//! Each pipeline stage fails fast with a typed error instead of propagating
//! NaN or partial output. The binary maps any of these to a non-zero exit and
//! a one-line diagnostic.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading places from the input table
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be opened or read
    #[error("cannot read {path}: {source}")]
    Read {
        /// Path that failed to open or read
        path: PathBuf,
        /// Underlying CSV/IO error
        #[source]
        source: csv::Error,
    },

    /// A data row did not have the expected (name, latitude, longitude) shape
    #[error("line {line}: expected 3 fields (name, latitude, longitude), found {found}")]
    MalformedRow {
        /// 1-based line number in the source file
        line: u64,
        /// Number of fields actually present
        found: usize,
    },

    /// A data row had an empty place name
    #[error("line {line}: place name is empty")]
    EmptyName {
        /// 1-based line number in the source file
        line: u64,
    },

    /// A latitude or longitude field did not parse as a number
    #[error("line {line}: invalid {field} {value:?}")]
    Coordinate {
        /// 1-based line number in the source file
        line: u64,
        /// Which field failed, "latitude" or "longitude"
        field: &'static str,
        /// The offending raw value
        value: String,
    },
}

/// Aggregation was attempted over zero pairs
///
/// Averaging an empty pair list would divide by zero; this error makes that
/// case explicit and catchable instead of silently producing NaN.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot aggregate an empty pair list (need at least 2 places)")]
pub struct EmptyInputError;

/// Failure while rendering the report
#[derive(Debug, Error)]
pub enum OutputError {
    /// Writing to the output sink failed
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
