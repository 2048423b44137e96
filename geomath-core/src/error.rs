use thiserror::Error;

/// Common errors across the geodetic math library
#[derive(Error, Debug)]
pub enum GeoError {
    #[error("Coordinate error: {0}")]
    Coordinate(#[from] CoordinateError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors raised by opt-in coordinate validation.
///
/// The conversions themselves never fail; these come from
/// [`GeoCoordinate::validate`](crate::GeoCoordinate::validate) and
/// [`GeoCoordinate::ensure_away_from_poles`](crate::GeoCoordinate::ensure_away_from_poles).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    #[error("Invalid latitude: {0} (must be -90 to 90)")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0} (must be -180 to 180)")]
    InvalidLongitude(f64),

    #[error("Coordinate contains a non-finite component")]
    NonFinite,

    #[error("Latitude {0} is too close to a pole")]
    NearPole(f64),
}

pub type Result<T> = std::result::Result<T, GeoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_error_display() {
        let err = CoordinateError::InvalidLatitude(95.0);
        assert_eq!(err.to_string(), "Invalid latitude: 95 (must be -90 to 90)");

        let err = CoordinateError::InvalidLongitude(200.0);
        assert_eq!(err.to_string(), "Invalid longitude: 200 (must be -180 to 180)");

        let err = CoordinateError::NonFinite;
        assert_eq!(err.to_string(), "Coordinate contains a non-finite component");

        let err = CoordinateError::NearPole(89.95);
        assert_eq!(err.to_string(), "Latitude 89.95 is too close to a pole");
    }

    #[test]
    fn test_geo_error_from_coordinate_error() {
        let coord_err = CoordinateError::InvalidLatitude(95.0);
        let geo_err: GeoError = coord_err.into();
        assert!(matches!(geo_err, GeoError::Coordinate(_)));
        assert_eq!(
            geo_err.to_string(),
            "Coordinate error: Invalid latitude: 95 (must be -90 to 90)"
        );
    }

    #[test]
    fn test_geo_error_config() {
        let err = GeoError::Config("missing origin".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing origin");
    }
}
