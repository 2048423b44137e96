pub mod approx_eq;
pub mod coordinate;
pub mod error;
pub mod frame;
pub mod matrix;

pub use approx_eq::{
    approximately_equals_degrees, approximately_equals_meters, DEGREES_TOLERANCE,
    METERS_TOLERANCE,
};
pub use coordinate::{ecef_to_geodetic, geodetic_to_ecef, EcefCoord, GeoCoordinate};
pub use error::{CoordinateError, GeoError, Result};
pub use frame::{ecef_to_enu, enu_to_ecef, flip_handedness, LocalTangentFrame};
pub use matrix::{MatrixStack, Transform4x4};
