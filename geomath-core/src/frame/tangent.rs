use nalgebra::{Matrix3, Vector3};
use tracing::{debug, warn};

use crate::coordinate::{
    ecef_to_geodetic, geodetic_to_ecef, EcefCoord, GeoCoordinate, POLE_MARGIN_DEGREES,
};
use crate::matrix::{MatrixStack, Transform4x4};

/// ECEF -> local rotation for a geodetic origin.
///
/// Rows of the standard basis change are East, North, Up; they are reordered
/// so the local axes come out as x = East, y = Up, z = North. The reordering
/// makes the basis left-handed, matching Y-up engine scenes; see
/// [`flip_handedness`] for a right-handed variant.
fn ecef_to_enu_rotation(origin: &GeoCoordinate) -> Matrix3<f64> {
    let lat = origin.latitude.to_radians();
    let lon = origin.longitude.to_radians();

    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();

    #[rustfmt::skip]
    let enu = Matrix3::new(
        -sin_lon,            cos_lon,             0.0,
        -sin_lat * cos_lon, -sin_lat * sin_lon,   cos_lat,
         cos_lat * cos_lon,  cos_lat * sin_lon,   sin_lat,
    );

    // East/North/Up -> East/Up/North
    #[rustfmt::skip]
    let remap = Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, 0.0, 1.0,
        0.0, 1.0, 0.0,
    );

    remap * enu
}

/// Transform mapping ECEF points into the tangent frame at `origin`.
///
/// Composed as `rotation * translate(-origin_ecef)`, so a point is first made
/// origin-relative and then rotated. At the poles the rotation follows
/// whatever longitude `origin` carries.
pub fn ecef_to_enu(origin: &GeoCoordinate) -> Transform4x4 {
    if 90.0 - origin.latitude.abs() < POLE_MARGIN_DEGREES {
        warn!(
            latitude = origin.latitude,
            longitude = origin.longitude,
            "Tangent frame origin near pole; east/north axes depend on longitude"
        );
    }

    let origin_ecef = geodetic_to_ecef(origin);
    let rotation = ecef_to_enu_rotation(origin);

    let mut stack = MatrixStack::new();
    stack.push_matrix();
    stack.mult_matrix(&rotation.to_homogeneous());
    stack.mult_matrix(&MatrixStack::translate(&-origin_ecef));
    stack.get_matrix()
}

/// Inverse of [`ecef_to_enu`]: tangent frame at `origin` back to ECEF
pub fn enu_to_ecef(origin: &GeoCoordinate) -> Transform4x4 {
    MatrixStack::rigid_inverse(&ecef_to_enu(origin))
}

/// Negate the North axis, turning East/Up/North into right-handed East/Up/South.
///
/// Never applied by this crate; callers with right-handed scenes opt in.
pub fn flip_handedness(v: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(v.x, v.y, -v.z)
}

/// Tangent frame at a fixed origin with both directions precomputed
#[derive(Debug, Clone, PartialEq)]
pub struct LocalTangentFrame {
    origin: GeoCoordinate,
    ecef_to_local: Transform4x4,
    local_to_ecef: Transform4x4,
}

impl LocalTangentFrame {
    pub fn new(origin: GeoCoordinate) -> Self {
        let ecef_to_local = ecef_to_enu(&origin);
        let local_to_ecef = MatrixStack::rigid_inverse(&ecef_to_local);

        debug!(
            latitude = origin.latitude,
            longitude = origin.longitude,
            altitude = origin.altitude,
            "Built local tangent frame"
        );

        Self {
            origin,
            ecef_to_local,
            local_to_ecef,
        }
    }

    pub fn origin(&self) -> GeoCoordinate {
        self.origin
    }

    pub fn ecef_to_local(&self) -> Transform4x4 {
        self.ecef_to_local
    }

    pub fn local_to_ecef(&self) -> Transform4x4 {
        self.local_to_ecef
    }

    pub fn ecef_to_local_point(&self, p: &EcefCoord) -> Vector3<f64> {
        MatrixStack::mult_point(&self.ecef_to_local, p)
    }

    pub fn local_to_ecef_point(&self, p: &Vector3<f64>) -> EcefCoord {
        MatrixStack::mult_point(&self.local_to_ecef, p)
    }

    /// Position of a geodetic point in this frame (x = East, y = Up, z = North)
    pub fn geodetic_to_local(&self, coord: &GeoCoordinate) -> Vector3<f64> {
        self.ecef_to_local_point(&geodetic_to_ecef(coord))
    }

    pub fn local_to_geodetic(&self, p: &Vector3<f64>) -> GeoCoordinate {
        ecef_to_geodetic(&self.local_to_ecef_point(p))
    }
}
