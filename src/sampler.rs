//! Random place sampling
//!
//! Picks a uniform random subset of the loaded places without replacement.
//! Uses the xoshiro256++ PRNG, which is fast and seedable so runs can be
//! reproduced with `--seed`.
//!
//! # Example
//!
//! ```
//! use geodist::sampler::Sampler;
//! use geodist::Place;
//!
//! let places = vec![
//!     Place::new("A", 0.0, 0.0),
//!     Place::new("B", 0.0, 1.0),
//!     Place::new("C", 1.0, 0.0),
//! ];
//!
//! let mut sampler = Sampler::with_seed(42);
//! let subset = sampler.sample(&places, 2);
//! assert_eq!(subset.len(), 2);
//!
//! // 0 means "use all places", in original order
//! let all = sampler.sample(&places, 0);
//! assert_eq!(all, places);
//! ```

use crate::place::Place;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Uniform random sampler over a place list
pub struct Sampler {
    rng: Xoshiro256PlusPlus,
}

impl Sampler {
    /// Create a sampler seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256PlusPlus::from_entropy(),
        }
    }

    /// Create a sampler with a specific seed
    ///
    /// Same seed, same subset. Useful for reproducible runs and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// Pick `n` places uniformly at random without replacement
    ///
    /// If `n <= 0` or `n` exceeds the number of places, the full list is
    /// returned unchanged in its original order and no randomness is consumed.
    /// Otherwise the result holds exactly `n` distinct places; their order is
    /// unspecified.
    pub fn sample(&mut self, places: &[Place], n: i64) -> Vec<Place> {
        if n <= 0 || n as usize > places.len() {
            return places.to_vec();
        }
        places
            .choose_multiple(&mut self.rng, n as usize)
            .cloned()
            .collect()
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn places(n: usize) -> Vec<Place> {
        (0..n)
            .map(|i| Place::new(format!("P{}", i), i as f64, -(i as f64)))
            .collect()
    }

    #[test]
    fn test_sample_zero_returns_all_in_order() {
        let input = places(5);
        let mut sampler = Sampler::new();
        assert_eq!(sampler.sample(&input, 0), input);
    }

    #[test]
    fn test_sample_negative_returns_all_in_order() {
        let input = places(5);
        let mut sampler = Sampler::new();
        assert_eq!(sampler.sample(&input, -3), input);
    }

    #[test]
    fn test_sample_oversized_returns_all_in_order() {
        let input = places(5);
        let mut sampler = Sampler::new();
        assert_eq!(sampler.sample(&input, 6), input);
    }

    #[test]
    fn test_sample_exact_size_is_valid() {
        let input = places(5);
        let mut sampler = Sampler::with_seed(1);
        let subset = sampler.sample(&input, 5);
        assert_eq!(subset.len(), 5);
    }

    #[test]
    fn test_sample_subset_size_and_uniqueness() {
        let input = places(20);
        let mut sampler = Sampler::with_seed(7);
        let subset = sampler.sample(&input, 8);

        assert_eq!(subset.len(), 8);
        for place in &subset {
            assert!(input.contains(place), "sampled unknown place {:?}", place);
        }
        for (i, a) in subset.iter().enumerate() {
            for b in &subset[i + 1..] {
                assert_ne!(a, b, "duplicate place in sample");
            }
        }
    }

    #[test]
    fn test_sample_seeded_is_deterministic() {
        let input = places(20);

        let mut first = Sampler::with_seed(12345);
        let mut second = Sampler::with_seed(12345);

        assert_eq!(first.sample(&input, 6), second.sample(&input, 6));
    }

    #[test]
    fn test_sample_empty_input() {
        let mut sampler = Sampler::new();
        assert!(sampler.sample(&[], 3).is_empty());
        assert!(sampler.sample(&[], 0).is_empty());
    }
}
