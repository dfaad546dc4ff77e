//! Great-circle distance
//!
//! Haversine formula over a spherical Earth. This is the only geodesic model
//! geodist supports; for city-scale reporting the ~0.5% error against an
//! ellipsoid does not matter.
//!
//! # Example
//!
//! ```
//! use geodist::distance::haversine_km;
//! use geodist::Place;
//!
//! let paris = Place::new("Paris", 48.8566, 2.3522);
//! let london = Place::new("London", 51.5074, -0.1278);
//!
//! let d = haversine_km(&paris, &london);
//! assert!(d > 340.0 && d < 350.0);
//! ```

use crate::place::Place;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two places, in kilometers
///
/// Coordinates are taken in degrees and converted to radians internally.
/// Returns 0 for identical coordinates. The haversine term is clamped to
/// [0, 1] before the square root so floating-point overshoot at antipodal or
/// identical points cannot push `asin` out of its domain.
pub fn haversine_km(a: &Place, b: &Place) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.clamp(0.0, 1.0).sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, lat: f64, lon: f64) -> Place {
        Place::new(name, lat, lon)
    }

    #[test]
    fn test_identical_points_distance_zero() {
        let a = place("A", 48.8566, 2.3522);
        assert_eq!(haversine_km(&a, &a), 0.0);

        let b = place("B", -33.8688, 151.2093);
        assert_eq!(haversine_km(&b, &b), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let cases = [
            (place("A", 0.0, 0.0), place("B", 0.0, 1.0)),
            (place("A", 48.8566, 2.3522), place("B", 51.5074, -0.1278)),
            (place("A", -33.8688, 151.2093), place("B", 35.6762, 139.6503)),
            (place("A", 89.9, 0.0), place("B", -89.9, 180.0)),
        ];

        for (a, b) in &cases {
            let ab = haversine_km(a, b);
            let ba = haversine_km(b, a);
            assert!((ab - ba).abs() < 1e-9, "asymmetric: {} vs {}", ab, ba);
        }
    }

    #[test]
    fn test_one_degree_along_equator() {
        let a = place("A", 0.0, 0.0);
        let b = place("B", 0.0, 1.0);
        let d = haversine_km(&a, &b);
        // One degree of longitude at the equator is ~111.19 km for R = 6371
        assert!((d - 111.195).abs() < 0.01, "got {}", d);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let a = place("A", 0.0, 0.0);
        let c = place("C", 1.0, 0.0);
        let d = haversine_km(&a, &c);
        assert!((d - 111.195).abs() < 0.01, "got {}", d);
    }

    #[test]
    fn test_diagonal_degree() {
        let b = place("B", 0.0, 1.0);
        let c = place("C", 1.0, 0.0);
        let d = haversine_km(&b, &c);
        assert!((d - 157.25).abs() < 0.01, "got {}", d);
    }

    #[test]
    fn test_antipodal_points_no_domain_error() {
        // Without clamping, rounding can push the haversine term above 1.0
        // and asin returns NaN. Antipodal distance is half the circumference.
        let a = place("A", 0.0, 0.0);
        let b = place("B", 0.0, 180.0);
        let d = haversine_km(&a, &b);
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!(d.is_finite());
        assert!((d - half_circumference).abs() < 0.01, "got {}", d);
    }

    #[test]
    fn test_triangle_inequality() {
        let points = [
            place("A", 0.0, 0.0),
            place("B", 10.0, 20.0),
            place("C", -30.0, 100.0),
            place("D", 60.0, -45.0),
        ];

        for a in &points {
            for b in &points {
                for c in &points {
                    let ab = haversine_km(a, b);
                    let bc = haversine_km(b, c);
                    let ac = haversine_km(a, c);
                    assert!(
                        ac <= ab + bc + 1e-6,
                        "triangle inequality violated: {} > {} + {}",
                        ac,
                        ab,
                        bc
                    );
                }
            }
        }
    }

    #[test]
    fn test_known_city_pair() {
        // Paris - London is roughly 344 km
        let paris = place("Paris", 48.8566, 2.3522);
        let london = place("London", 51.5074, -0.1278);
        let d = haversine_km(&paris, &london);
        assert!(d > 340.0 && d < 350.0, "got {}", d);
    }
}
