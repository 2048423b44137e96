use super::GeoCoordinate;
use crate::error::CoordinateError;

/// Minimum distance from a pole, in degrees, accepted for anchor origins.
pub const POLE_MARGIN_DEGREES: f64 = 0.1;

impl GeoCoordinate {
    /// Check that every component is finite and latitude/longitude are in range.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !(self.latitude.is_finite() && self.longitude.is_finite() && self.altitude.is_finite()) {
            return Err(CoordinateError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(CoordinateError::InvalidLatitude(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(CoordinateError::InvalidLongitude(self.longitude));
        }
        Ok(())
    }

    /// Reject latitudes within `margin_deg` of either pole, where the local
    /// tangent frame loses its longitude reference.
    pub fn ensure_away_from_poles(&self, margin_deg: f64) -> Result<(), CoordinateError> {
        if 90.0 - self.latitude.abs() < margin_deg {
            return Err(CoordinateError::NearPole(self.latitude));
        }
        Ok(())
    }
}
