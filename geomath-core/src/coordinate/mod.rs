//! Coordinate system transformations

mod ellipsoid;
mod validate;

pub use ellipsoid::{
    ecef_to_geodetic, geodetic_to_ecef,
    EcefCoord, GeoCoordinate, WGS84_A, WGS84_B, WGS84_E2,
};
pub use validate::POLE_MARGIN_DEGREES;
