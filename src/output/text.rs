//! Human-readable text report
//!
//! Layout:
//!
//! ```text
//! name        name        distance
//!
//! Berlin      Prague      280.3278...          km
//! ...
//!
//! Average distance: 1288.07 km. Closest pair: Berlin - Rome 1183.72 km
//! ```
//!
//! Name columns are left-justified to the widest name plus two spaces of
//! padding; the distance column is left-justified to 20 characters followed
//! by the unit. The summary line uses two-decimal formatting.

use crate::error::OutputError;
use crate::place::PairDistance;
use crate::stats::Summary;
use std::io::Write;

/// Padding added to the widest name for column alignment
const COLUMN_PADDING: usize = 2;

/// Width of the distance column before the unit suffix
const DISTANCE_WIDTH: usize = 20;

/// Write the full report: header, pair table, separator, summary line
pub fn write_report<W: Write>(
    out: &mut W,
    header: &[String],
    pairs: &[PairDistance],
    summary: &Summary,
) -> Result<(), OutputError> {
    let width = column_width(header, pairs);

    let mut header_line = String::new();
    for label in header {
        header_line.push_str(&format!("{:<width$}", label));
    }
    writeln!(out, "{}", header_line.trim_end())?;
    writeln!(out)?;

    for pair in pairs {
        writeln!(
            out,
            "{:<width$}{:<width$}{:<dist_width$} km",
            pair.name_a,
            pair.name_b,
            pair.distance_km,
            dist_width = DISTANCE_WIDTH,
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Average distance: {:.2} km. Closest pair: {} - {} {:.2} km",
        summary.average_km,
        summary.closest_pair.name_a,
        summary.closest_pair.name_b,
        summary.closest_pair.distance_km,
    )?;

    Ok(())
}

/// Widest name across header labels and pair names, plus padding
fn column_width(header: &[String], pairs: &[PairDistance]) -> usize {
    let widest = header
        .iter()
        .map(String::len)
        .chain(pairs.iter().map(|p| p.name_a.len().max(p.name_b.len())))
        .max()
        .unwrap_or(0);
    widest + COLUMN_PADDING
}
