//! Summary statistics over the ranked pair list
//!
//! Two aggregates are reported: the arithmetic mean of all pair distances and
//! the pair whose distance is closest to that mean. Both fail with
//! [`EmptyInputError`] on an empty pair list rather than producing NaN.
//!
//! # Example
//!
//! ```
//! use geodist::stats::Summary;
//! use geodist::{distance::haversine_km, ranker::rank, Place};
//!
//! let places = vec![
//!     Place::new("A", 0.0, 0.0),
//!     Place::new("B", 0.0, 1.0),
//!     Place::new("C", 1.0, 0.0),
//! ];
//! let pairs = rank(&places, haversine_km);
//! let summary = Summary::from_pairs(&pairs).unwrap();
//!
//! assert!(summary.average_km > 0.0);
//! assert_eq!(summary.closest_pair.name_a, "A");
//! ```

use crate::error::EmptyInputError;
use crate::place::PairDistance;

/// Aggregate view of a ranked pair list
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Arithmetic mean of all pair distances in kilometers
    pub average_km: f64,
    /// The pair whose distance is closest to the mean
    pub closest_pair: PairDistance,
}

impl Summary {
    /// Compute both aggregates from a non-empty pair list
    pub fn from_pairs(pairs: &[PairDistance]) -> Result<Self, EmptyInputError> {
        let average_km = average(pairs)?;
        let closest_pair = closest_to_average(pairs, average_km)?.clone();
        Ok(Self {
            average_km,
            closest_pair,
        })
    }
}

/// Arithmetic mean of all pair distances
///
/// Returns [`EmptyInputError`] for an empty list so the division by zero is
/// an explicit error instead of a silent NaN.
pub fn average(pairs: &[PairDistance]) -> Result<f64, EmptyInputError> {
    if pairs.is_empty() {
        return Err(EmptyInputError);
    }
    let total: f64 = pairs.iter().map(|p| p.distance_km).sum();
    Ok(total / pairs.len() as f64)
}

/// Pair with minimum absolute deviation from `average_km`
///
/// Linear scan; on ties the first minimal pair in input order wins (the
/// current best is only replaced on strictly smaller deviation).
pub fn closest_to_average(
    pairs: &[PairDistance],
    average_km: f64,
) -> Result<&PairDistance, EmptyInputError> {
    let mut iter = pairs.iter();
    let mut best = iter.next().ok_or(EmptyInputError)?;
    let mut best_deviation = (best.distance_km - average_km).abs();

    for pair in iter {
        let deviation = (pair.distance_km - average_km).abs();
        if deviation < best_deviation {
            best_deviation = deviation;
            best = pair;
        }
    }
    Ok(best)
}
