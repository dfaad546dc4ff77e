//! Core data types
//!
//! A [`Place`] is a named point on the globe with coordinates in degrees.
//! A [`PairDistance`] is the derived record for one unordered pair of places.
//! Both are immutable once created; every pipeline stage produces new values
//! instead of mutating its input.

/// A named geographic point
///
/// Latitude is expected in [-90, 90] degrees and longitude in [-180, 180]
/// degrees. Out-of-range coordinates are not sanitized; the distance function
/// accepts them but the result is meaningless.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// Display name, non-empty but not necessarily unique
    pub name: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Place {
    /// Create a new place
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }
}

/// Distance between one unordered pair of places
///
/// One record exists per pair (i, j) with i < j over the input sequence.
/// There are no self-pairs and no duplicate orderings.
#[derive(Debug, Clone, PartialEq)]
pub struct PairDistance {
    /// Name of the first place (lower input index)
    pub name_a: String,
    /// Name of the second place (higher input index)
    pub name_b: String,
    /// Great-circle distance in kilometers, always >= 0
    pub distance_km: f64,
}
