//! Geospatial utilities for devjobs.
//!
//! This crate provides:
//! - Haversine distance calculations
//! - Coordinate extraction from the job API's `[longitude, latitude]` arrays
//! - Batch processing with optional parallelism
//!
//! # Example
//!
//! ```
//! use devjobs_geo::{haversine_distance, Coordinate};
//!
//! let stockholm = Coordinate::new(59.3293, 18.0686);
//! let malmo = Coordinate::new(55.6050, 13.0038);
//!
//! let distance_km = haversine_distance(&stockholm, &malmo);
//! assert!((distance_km - 512.0).abs() < 15.0);
//! ```

pub mod batch;
mod error;
mod extract;
mod haversine;

pub use batch::{calculate_distances, DistanceResult};
pub use error::{GeoError, Result};
pub use extract::{coordinate_from_lon_lat, parse_coordinate_array};
pub use haversine::{haversine_distance, haversine_distance_meters, EARTH_RADIUS_KM, EARTH_RADIUS_M};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Creates a coordinate, rejecting out-of-range values.
    ///
    /// Use this at trust boundaries (user input, CLI flags); [`Self::new`]
    /// is for values already known to be valid.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        let coord = Self::new(latitude, longitude);
        if coord.is_valid() {
            Ok(coord)
        } else {
            Err(GeoError::OutOfRange {
                latitude,
                longitude,
            })
        }
    }

    /// Returns true if the coordinate has valid values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}
