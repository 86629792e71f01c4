//! Coordinate extraction from job-ad records.
//!
//! The job API delivers workplace coordinates as a two-element
//! `[longitude, latitude]` array. The order must be swapped before use,
//! and absent or malformed arrays yield `None`, never an error.

use crate::Coordinate;

/// Build a coordinate from a source-order `[longitude, latitude]` slice.
///
/// # Arguments
/// * `lon_lat` - Slice as delivered by the API (longitude first)
///
/// # Returns
/// * `Some(Coordinate)` with the order swapped to (lat, lon)
/// * `None` for short slices or out-of-range/non-finite values
pub fn coordinate_from_lon_lat(lon_lat: &[f64]) -> Option<Coordinate> {
    if lon_lat.len() < 2 {
        return None;
    }

    let coord = Coordinate::new(lon_lat[1], lon_lat[0]);
    coord.is_valid().then_some(coord)
}

/// Extract a coordinate from a JSON value holding a `[lon, lat]` array.
///
/// This is the entry point for parsing workplace locations straight from
/// a deserialized ad record.
///
/// # Returns
/// * `Some(Coordinate)` if parsing succeeds
/// * `None` if the value is null, not an array, too short, or non-numeric
///
/// # Example
/// ```
/// use devjobs_geo::parse_coordinate_array;
/// use serde_json::json;
///
/// let coords = json!([18.0686, 59.3293]);
/// let coord = parse_coordinate_array(&coords).unwrap();
/// assert!((coord.latitude - 59.3293).abs() < 0.0001);
///
/// assert!(parse_coordinate_array(&json!(null)).is_none());
/// assert!(parse_coordinate_array(&json!([])).is_none());
/// ```
pub fn parse_coordinate_array(value: &serde_json::Value) -> Option<Coordinate> {
    let array = value.as_array()?;
    if array.len() < 2 {
        return None;
    }

    let lon = array[0].as_f64()?;
    let lat = array[1].as_f64()?;

    coordinate_from_lon_lat(&[lon, lat])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_swaps_lon_lat_order() {
        // Stockholm delivered as [lon, lat]
        let coord = coordinate_from_lon_lat(&[18.0686, 59.3293]).unwrap();
        assert!((coord.latitude - 59.3293).abs() < 0.0001);
        assert!((coord.longitude - 18.0686).abs() < 0.0001);
    }

    #[test]
    fn test_short_slice_is_none() {
        assert!(coordinate_from_lon_lat(&[]).is_none());
        assert!(coordinate_from_lon_lat(&[18.0686]).is_none());
    }

    #[test]
    fn test_out_of_range_is_none() {
        // lat/lon accidentally not swapped by the source would overflow latitude
        assert!(coordinate_from_lon_lat(&[59.3293, 181.0]).is_none());
        assert!(coordinate_from_lon_lat(&[f64::NAN, 59.3293]).is_none());
    }

    #[test]
    fn test_parse_json_array() {
        let coord = parse_coordinate_array(&json!([18.0686, 59.3293])).unwrap();
        assert!((coord.latitude - 59.3293).abs() < 0.0001);
    }

    #[test]
    fn test_parse_null_returns_none() {
        assert!(parse_coordinate_array(&json!(null)).is_none());
    }

    #[test]
    fn test_parse_empty_array_returns_none() {
        assert!(parse_coordinate_array(&json!([])).is_none());
    }

    #[test]
    fn test_parse_non_numeric_returns_none() {
        assert!(parse_coordinate_array(&json!(["18.07", "59.33"])).is_none());
        assert!(parse_coordinate_array(&json!({"lat": 59.33})).is_none());
    }

    #[test]
    fn test_extra_elements_tolerated() {
        let coord = parse_coordinate_array(&json!([18.0686, 59.3293, 0.0])).unwrap();
        assert!((coord.longitude - 18.0686).abs() < 0.0001);
    }
}
