//! Frame configuration loaded from JSON

use std::fs;
use std::path::Path;

use geomath_core::{GeoCoordinate, GeoError, Result};
use serde::Deserialize;

fn default_precision() -> usize {
    9
}

/// Contents of a `--config` file.
///
/// ```json
/// { "origin": { "latitude": 37.422098, "longitude": -122.08286, "altitude": 11.5 },
///   "precision": 6 }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub origin: Option<GeoCoordinate>,

    /// Decimal places in printed output
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: None,
            precision: default_precision(),
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(text).map_err(|e| GeoError::Config(e.to_string()))?;
        if let Some(origin) = &config.origin {
            origin.validate()?;
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| GeoError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }
}
