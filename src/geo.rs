//! Great-circle distance between latitude/longitude pairs.

use serde::{Deserialize, Serialize};

/// Mean radius of the Earth in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the Earth's surface, in degrees.
///
/// Ranges are not validated. Out-of-range values produce meaningless but
/// finite distances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Haversine distance to `other`, in kilometres.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// Haversine distance between two points, in kilometres.
///
/// Symmetric in its two points and exactly zero when they are identical.
/// The intermediate term is clamped to `[0, 1]` so rounding never pushes
/// `asin` outside its domain.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_POINTS: [(f64, f64); 6] = [
        (40.7152, -73.9877),
        (34.0522, -118.2437),
        (-33.8688, 151.2093),
        (89.9999, 0.0),
        (0.0, 179.9999),
        (35.1, -107.9),
    ];

    #[test]
    fn test_distance_to_self_is_zero() {
        for (lat, lon) in SAMPLE_POINTS {
            assert_eq!(haversine(lat, lon, lat, lon), 0.0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        for (lat1, lon1) in SAMPLE_POINTS {
            for (lat2, lon2) in SAMPLE_POINTS {
                assert_eq!(
                    haversine(lat1, lon1, lat2, lon2),
                    haversine(lat2, lon2, lat1, lon1)
                );
            }
        }
    }

    #[test]
    fn test_known_distance() {
        // New York City to Los Angeles is roughly 3,936 km.
        let d = haversine(40.7128, -74.0060, 34.0522, -118.2437);
        assert!((d - 3936.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn test_antipodal_points_do_not_produce_nan() {
        let d = haversine(0.0, 0.0, 0.0, 180.0);
        assert!(d.is_finite());
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_input_is_finite() {
        let d = haversine(400.0, -900.0, -250.0, 1234.5);
        assert!(d.is_finite());
        assert!(d >= 0.0);
    }

    #[test]
    fn test_coordinate_distance_to() {
        let a = Coordinate::new(40.7152, -73.9877);
        let b = Coordinate::new(40.7200, -73.9900);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
        assert!(a.distance_to(&b) < 1.0);
    }
}
