//! Coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Mean Earth radius in kilometres used by [`haversine_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A validated WGS84 latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Builds a coordinate, rejecting non-finite values and values outside
    /// `-90..=90` (latitude) or `-180..=180` (longitude).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinate`] when either component is out
    /// of range or not finite.
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoreError> {
        let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
        let lon_ok = lon.is_finite() && (-180.0..=180.0).contains(&lon);
        if lat_ok && lon_ok {
            Ok(Self { lat, lon })
        } else {
            Err(CoreError::InvalidCoordinate { lat, lon })
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lon)
    }
}

/// Great-circle distance between two coordinates in kilometres, using the
/// haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
#[must_use]
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
