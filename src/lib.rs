//! geodist - pairwise great-circle distance reporting
//!
//! geodist loads a list of named places from a CSV file, optionally samples a
//! random subset, computes the haversine distance between every unordered pair
//! and prints the pairs sorted by distance together with summary statistics.
//!
//! # Pipeline
//!
//! - **Loader**: CSV rows of (name, latitude, longitude) into [`Place`] records
//! - **Sampler**: uniform random subset without replacement, seedable
//! - **Ranker**: all i < j pairs, distances computed in parallel, stable ascending sort
//! - **Aggregator**: average distance and the pair closest to that average
//! - **Report**: column-aligned text output

pub mod config;
pub mod distance;
pub mod error;
pub mod input;
pub mod output;
pub mod place;
pub mod ranker;
pub mod sampler;
pub mod stats;

// Re-export commonly used types
pub use place::{PairDistance, Place};
pub use stats::Summary;

/// Result type used throughout geodist
pub type Result<T> = anyhow::Result<T>;
