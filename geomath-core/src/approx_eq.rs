//! Tolerance-based comparison of geodetic values

/// Angular tolerance in decimal degrees (roughly a millimeter on the surface).
pub const DEGREES_TOLERANCE: f64 = 1e-8;

/// Linear tolerance in meters.
pub const METERS_TOLERANCE: f64 = 1e-4;

/// True when two angles in degrees differ by less than [`DEGREES_TOLERANCE`].
pub fn approximately_equals_degrees(a: f64, b: f64) -> bool {
    (a - b).abs() < DEGREES_TOLERANCE
}

/// True when two lengths in meters differ by less than [`METERS_TOLERANCE`].
pub fn approximately_equals_meters(a: f64, b: f64) -> bool {
    (a - b).abs() < METERS_TOLERANCE
}
