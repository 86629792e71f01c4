//! Batch distance calculations with optional parallelism.
//!
//! Computes distances from a searcher's position to many ads in one pass,
//! for radius filtering and closest-first presentation.

use crate::{haversine_distance, parse_coordinate_array, Coordinate};
use serde::{Deserialize, Serialize};

/// Result of a distance calculation for a single ad.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceResult {
    /// The ad ID
    pub id: String,
    /// Calculated distance in kilometers (Infinity if the location is unusable)
    pub distance: f64,
}

/// Input item for batch distance calculation.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationItem {
    /// Ad ID
    pub id: String,
    /// Workplace coordinates as a `[lon, lat]` JSON array
    pub coordinates: serde_json::Value,
}

/// Calculate distances from a searcher's position to multiple ads.
///
/// # Arguments
/// * `user` - The searcher's coordinate
/// * `items` - Slice of ads with raw coordinate data
///
/// # Returns
/// Vector of distance results, one for each input item.
///
/// # Example
/// ```
/// use devjobs_geo::{calculate_distances, batch::LocationItem, Coordinate};
/// use serde_json::json;
///
/// let items = vec![
///     LocationItem { id: "a".into(), coordinates: json!([18.0686, 59.3293]) },
///     LocationItem { id: "b".into(), coordinates: json!([13.0038, 55.6050]) },
/// ];
///
/// let results = calculate_distances(&Coordinate::new(59.33, 18.07), &items);
/// assert_eq!(results.len(), 2);
/// ```
pub fn calculate_distances(user: &Coordinate, items: &[LocationItem]) -> Vec<DistanceResult> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items
            .par_iter()
            .map(|item| calculate_single_distance(user, item))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items
            .iter()
            .map(|item| calculate_single_distance(user, item))
            .collect()
    }
}

/// Calculate distances and return them sorted closest-first.
///
/// Ads with unusable locations sort last (Infinity).
pub fn calculate_distances_sorted(
    user: &Coordinate,
    items: &[LocationItem],
    max_results: Option<usize>,
) -> Vec<DistanceResult> {
    let mut results = calculate_distances(user, items);

    results.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(max) = max_results {
        results.truncate(max);
    }

    results
}

/// Calculate distances and keep only ads within a radius, sorted closest-first.
pub fn calculate_distances_within_radius(
    user: &Coordinate,
    items: &[LocationItem],
    radius_km: f64,
) -> Vec<DistanceResult> {
    let mut results = calculate_distances(user, items);

    results.retain(|r| r.distance <= radius_km);

    results.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    results
}

/// Calculate distance for a single ad.
#[inline]
fn calculate_single_distance(user: &Coordinate, item: &LocationItem) -> DistanceResult {
    let distance = parse_coordinate_array(&item.coordinates)
        .map(|coord| haversine_distance(user, &coord))
        .unwrap_or(f64::INFINITY);

    DistanceResult {
        id: item.id.clone(),
        distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_items() -> Vec<LocationItem> {
        vec![
            // Stockholm
            LocationItem {
                id: "stockholm".into(),
                coordinates: json!([18.0686, 59.3293]),
            },
            // Malmö
            LocationItem {
                id: "malmo".into(),
                coordinates: json!([13.0038, 55.6050]),
            },
            // Gothenburg
            LocationItem {
                id: "gbg".into(),
                coordinates: json!([11.9746, 57.7089]),
            },
            // Missing location
            LocationItem {
                id: "nowhere".into(),
                coordinates: json!([]),
            },
        ]
    }

    #[test]
    fn test_batch_distances() {
        let items = create_test_items();
        // Searcher in central Stockholm
        let user = Coordinate::new(59.3293, 18.0686);
        let results = calculate_distances(&user, &items);

        assert_eq!(results.len(), 4);

        let stockholm = results.iter().find(|r| r.id == "stockholm").unwrap();
        assert!(stockholm.distance < 1.0);

        let nowhere = results.iter().find(|r| r.id == "nowhere").unwrap();
        assert!(nowhere.distance.is_infinite());
    }

    #[test]
    fn test_sorted_distances() {
        let items = create_test_items();
        let user = Coordinate::new(59.3293, 18.0686);
        let results = calculate_distances_sorted(&user, &items, None);

        for window in results.windows(2) {
            assert!(window[0].distance <= window[1].distance);
        }
        assert_eq!(results[0].id, "stockholm");
    }

    #[test]
    fn test_radius_filter() {
        let items = create_test_items();
        let user = Coordinate::new(59.3293, 18.0686);
        // 50 km keeps Stockholm, drops Malmö (~512 km), Gothenburg (~398 km)
        // and the coordinate-less ad
        let results = calculate_distances_within_radius(&user, &items, 50.0);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "stockholm");
    }

    #[test]
    fn test_max_results() {
        let items = create_test_items();
        let user = Coordinate::new(59.3293, 18.0686);
        let results = calculate_distances_sorted(&user, &items, Some(2));

        assert_eq!(results.len(), 2);
    }
}
