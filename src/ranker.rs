//! Pairwise distance ranking
//!
//! Enumerates every unordered pair (i, j) with i < j over the input places,
//! computes the distance for each pair and returns the list sorted ascending
//! by distance. Pair distances are independent of each other, so they are
//! computed in parallel with rayon; the final sort is sequential and stable,
//! which keeps ties in enumeration order and makes the output deterministic
//! for a given input order.

use crate::place::{PairDistance, Place};
use rayon::prelude::*;

/// Compute and sort all pairwise distances
///
/// `distance_fn` maps two places to a distance in kilometers. Returns an
/// empty list for fewer than 2 places; otherwise exactly
/// `n * (n - 1) / 2` entries, sorted non-decreasing by `distance_km` with
/// ties kept in enumeration order.
pub fn rank<F>(places: &[Place], distance_fn: F) -> Vec<PairDistance>
where
    F: Fn(&Place, &Place) -> f64 + Sync,
{
    let index_pairs: Vec<(usize, usize)> = (0..places.len())
        .flat_map(|i| (i + 1..places.len()).map(move |j| (i, j)))
        .collect();

    let mut pairs: Vec<PairDistance> = index_pairs
        .into_par_iter()
        .map(|(i, j)| PairDistance {
            name_a: places[i].name.clone(),
            name_b: places[j].name.clone(),
            distance_km: distance_fn(&places[i], &places[j]),
        })
        .collect();

    // Stable sort: equal distances stay in enumeration order
    pairs.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    pairs
}
