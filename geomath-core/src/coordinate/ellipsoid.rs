use nalgebra::Vector3;
use tracing::trace;

use crate::approx_eq::{approximately_equals_degrees, approximately_equals_meters};

/// ECEF coordinates (Earth-Centered, Earth-Fixed), meters
pub type EcefCoord = Vector3<f64>;

/// Geodetic position on the WGS84 ellipsoid.
///
/// Ranges are not enforced here; see [`GeoCoordinate::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoCoordinate {
    pub latitude: f64,  // degrees
    pub longitude: f64, // degrees
    pub altitude: f64,  // meters above WGS84 ellipsoid
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// Compare latitude and longitude in degrees and altitude in meters
    pub fn approx_eq(&self, other: &GeoCoordinate) -> bool {
        approximately_equals_degrees(self.latitude, other.latitude)
            && approximately_equals_degrees(self.longitude, other.longitude)
            && approximately_equals_meters(self.altitude, other.altitude)
    }
}

// WGS84 ellipsoid parameters, kept as literals rather than derived from flattening
pub const WGS84_A: f64 = 6378137.0; // equatorial radius (meters)
pub const WGS84_B: f64 = 6356752.314245179; // polar radius (meters)

/// First eccentricity squared
pub const WGS84_E2: f64 = 1.0 - (WGS84_B * WGS84_B) / (WGS84_A * WGS84_A);

/// Below this distance from the polar axis longitude is undefined
const POLAR_AXIS_EPSILON: f64 = 1e-10;

/// Prime-vertical radius of curvature at a geodetic latitude (radians)
fn prime_vertical_radius(lat_rad: f64) -> f64 {
    let sin_lat = lat_rad.sin();
    WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt()
}

/// Convert ECEF to geodetic coordinates.
///
/// Single-pass Bowring approximation starting from the parametric latitude.
/// Sub-millimeter for terrestrial altitudes; degrades slowly with height
/// (a few millimeters at orbital altitudes). Points on the polar axis map to
/// latitude ±90 and longitude 0.
pub fn ecef_to_geodetic(ecef: &EcefCoord) -> GeoCoordinate {
    let x = ecef.x;
    let y = ecef.y;
    let z = ecef.z;

    let p = (x * x + y * y).sqrt();

    if p < POLAR_AXIS_EPSILON {
        trace!(z, "ECEF point on polar axis");
        let latitude = if z < 0.0 { -90.0 } else { 90.0 };
        return GeoCoordinate::new(latitude, 0.0, z.abs() - WGS84_B);
    }

    let a2_minus_b2 = WGS84_A * WGS84_A - WGS84_B * WGS84_B;

    // Parametric latitude
    let q = (z * WGS84_A).atan2(p * WGS84_B);
    let sin_q = q.sin();
    let cos_q = q.cos();

    let lon = y.atan2(x);
    let lat = (z + a2_minus_b2 / WGS84_B * sin_q * sin_q * sin_q)
        .atan2(p - a2_minus_b2 / WGS84_A * cos_q * cos_q * cos_q);

    let n = prime_vertical_radius(lat);
    let alt = p / lat.cos() - n;

    GeoCoordinate::new(lat.to_degrees(), lon.to_degrees(), alt)
}

/// Convert geodetic coordinates to ECEF
pub fn geodetic_to_ecef(coord: &GeoCoordinate) -> EcefCoord {
    let lat_rad = coord.latitude.to_radians();
    let lon_rad = coord.longitude.to_radians();

    let sin_lat = lat_rad.sin();
    let cos_lat = lat_rad.cos();
    let sin_lon = lon_rad.sin();
    let cos_lon = lon_rad.cos();

    let n = prime_vertical_radius(lat_rad);

    let x = (n + coord.altitude) * cos_lat * cos_lon;
    let y = (n + coord.altitude) * cos_lat * sin_lon;
    let z = (n * (1.0 - WGS84_E2) + coord.altitude) * sin_lat;

    Vector3::new(x, y, z)
}
