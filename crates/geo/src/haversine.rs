//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two
//! points on a sphere given their longitudes and latitudes.

use crate::Coordinate;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// # Arguments
/// * `from` - Starting coordinate
/// * `to` - Ending coordinate
///
/// # Returns
/// Distance in kilometers
///
/// # Example
/// ```
/// use devjobs_geo::{haversine_distance, Coordinate};
///
/// let stockholm = Coordinate::new(59.3293, 18.0686);
/// let gothenburg = Coordinate::new(57.7089, 11.9746);
///
/// let distance = haversine_distance(&stockholm, &gothenburg);
/// assert!((distance - 398.0).abs() < 10.0);
/// ```
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_KM)
}

/// Calculates the great-circle distance between two coordinates in meters.
#[inline]
pub fn haversine_distance_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_M)
}

/// Internal function that calculates distance with a custom radius.
#[inline]
fn haversine_distance_with_radius(from: &Coordinate, to: &Coordinate, radius: f64) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test data: known distances between Swedish cities
    const STOCKHOLM: Coordinate = Coordinate { latitude: 59.3293, longitude: 18.0686 };
    const GOTHENBURG: Coordinate = Coordinate { latitude: 57.7089, longitude: 11.9746 };
    const MALMO: Coordinate = Coordinate { latitude: 55.6050, longitude: 13.0038 };
    const UMEA: Coordinate = Coordinate { latitude: 63.8258, longitude: 20.2630 };

    #[test]
    fn test_stockholm_to_gothenburg() {
        let distance = haversine_distance(&STOCKHOLM, &GOTHENBURG);
        // Expected: ~398 km
        assert!((distance - 398.0).abs() < 5.0, "Stockholm-Gothenburg: {}", distance);
    }

    #[test]
    fn test_stockholm_to_malmo() {
        let distance = haversine_distance(&STOCKHOLM, &MALMO);
        // Expected: ~512 km
        assert!((distance - 512.0).abs() < 10.0, "Stockholm-Malmö: {}", distance);
    }

    #[test]
    fn test_stockholm_to_umea() {
        let distance = haversine_distance(&STOCKHOLM, &UMEA);
        // Expected: ~510 km
        assert!((distance - 510.0).abs() < 15.0, "Stockholm-Umeå: {}", distance);
    }

    #[test]
    fn test_same_point_zero_distance() {
        let distance = haversine_distance(&STOCKHOLM, &STOCKHOLM);
        assert!(distance.abs() < 0.001);
    }

    #[test]
    fn test_symmetry() {
        let d1 = haversine_distance(&STOCKHOLM, &MALMO);
        let d2 = haversine_distance(&MALMO, &STOCKHOLM);
        assert!((d1 - d2).abs() < 0.001);
    }

    #[test]
    fn test_meters_conversion() {
        let km = haversine_distance(&STOCKHOLM, &GOTHENBURG);
        let meters = haversine_distance_meters(&STOCKHOLM, &GOTHENBURG);
        assert!((meters - km * 1000.0).abs() < 1.0);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn distance_is_symmetric(
                lat1 in -89.0f64..89.0, lon1 in -179.0f64..179.0,
                lat2 in -89.0f64..89.0, lon2 in -179.0f64..179.0,
            ) {
                let a = Coordinate::new(lat1, lon1);
                let b = Coordinate::new(lat2, lon2);
                let d1 = haversine_distance(&a, &b);
                let d2 = haversine_distance(&b, &a);
                prop_assert!((d1 - d2).abs() < 1e-6);
            }

            #[test]
            fn distance_is_non_negative(
                lat1 in -89.0f64..89.0, lon1 in -179.0f64..179.0,
                lat2 in -89.0f64..89.0, lon2 in -179.0f64..179.0,
            ) {
                let a = Coordinate::new(lat1, lon1);
                let b = Coordinate::new(lat2, lon2);
                prop_assert!(haversine_distance(&a, &b) >= 0.0);
            }
        }
    }
}
