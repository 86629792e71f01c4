//! Swedish city gazetteer.
//!
//! A fixed mapping from normalized city name to coordinate, used both to
//! resolve a location name to a center point and to recognize city
//! mentions embedded in free query text.

use devjobs_geo::{haversine_distance, Coordinate};
use devjobs_search::normalize;

/// Gazetteer entries as (normalized name, latitude, longitude).
///
/// Enumeration order decides which city wins when a query mentions
/// several; bigger cities come first.
static CITIES: &[(&str, f64, f64)] = &[
    ("stockholm", 59.3293, 18.0686),
    ("goteborg", 57.7089, 11.9746),
    ("malmo", 55.6050, 13.0038),
    ("uppsala", 59.8586, 17.6389),
    ("vasteras", 59.6099, 16.5448),
    ("orebro", 59.2741, 15.2066),
    ("linkoping", 58.4108, 15.6214),
    ("helsingborg", 56.0465, 12.6945),
    ("lund", 55.7047, 13.1910),
    ("norrkoping", 58.5877, 16.1924),
    ("umea", 63.8258, 20.2630),
    ("lulea", 65.5848, 22.1547),
    ("vaxjo", 56.8777, 14.8091),
    ("karlstad", 59.3793, 13.5036),
    ("jonkoping", 57.7815, 14.1562),
    ("boras", 57.7210, 12.9401),
    ("eskilstuna", 59.3666, 16.5077),
    ("sundsvall", 62.3908, 17.3069),
    ("gavle", 60.6749, 17.1413),
    ("huddinge", 59.2371, 17.9820),
    ("nacka", 59.3105, 18.1637),
    ("solna", 59.3600, 18.0009),
    ("sodertalje", 59.1955, 17.6253),
    ("ostersund", 63.1767, 14.6361),
    ("trollhattan", 58.2837, 12.2886),
    ("kristianstad", 56.0294, 14.1567),
    ("karlskrona", 56.1612, 15.5869),
    ("skovde", 58.3912, 13.8450),
    ("hassleholm", 56.1589, 13.7668),
    ("uddevalla", 58.3498, 11.9424),
    ("landskrona", 55.8708, 12.8301),
    ("varberg", 57.1057, 12.2508),
    ("trelleborg", 55.3754, 13.1569),
    ("falkenberg", 56.9055, 12.4912),
    ("sandviken", 60.6180, 16.7760),
    ("kungsbacka", 57.4874, 12.0765),
    ("karlshamn", 56.1706, 14.8637),
    ("kristinehamn", 59.3097, 14.1077),
    ("motala", 58.5371, 15.0365),
    ("pitea", 65.3172, 21.4797),
    ("vanersborg", 58.3808, 12.3234),
    ("borlange", 60.4858, 15.4371),
    ("saffle", 59.1322, 12.9226),
    ("lindesberg", 59.5934, 15.2263),
    ("kramfors", 62.9313, 17.7769),
    ("haparanda", 65.8355, 24.1370),
];

/// All known city names, in gazetteer order.
pub fn city_names() -> impl Iterator<Item = &'static str> {
    CITIES.iter().map(|(name, _, _)| *name)
}

/// Look up the coordinate for a city name.
///
/// The input is normalized first, so "Göteborg" and "goteborg" both
/// resolve.
pub fn city_coordinate(name: &str) -> Option<Coordinate> {
    let normalized = normalize(name);
    CITIES
        .iter()
        .find(|(city, _, _)| *city == normalized)
        .map(|(_, lat, lon)| Coordinate::new(*lat, *lon))
}

/// Find the first gazetteer city mentioned in free query text.
///
/// Lets "react stockholm" carry a location hint without a separate
/// location field. Returns the canonical normalized name.
pub fn infer_city_from_query(query: &str) -> Option<&'static str> {
    let normalized = normalize(query);
    if normalized.is_empty() {
        return None;
    }

    CITIES
        .iter()
        .map(|(city, _, _)| *city)
        .find(|city| normalized.contains(city))
}

/// Find the gazetteer city closest to a coordinate.
///
/// Used to give a geolocated searcher a municipality name to match
/// against when an ad lacks coordinates of its own.
///
/// # Returns
/// The closest city name and its distance in kilometers.
pub fn nearest_city(coord: &Coordinate) -> Option<(&'static str, f64)> {
    CITIES
        .iter()
        .map(|(name, lat, lon)| {
            let distance = haversine_distance(coord, &Coordinate::new(*lat, *lon));
            (*name, distance)
        })
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}
