//! Configuration for write-grid fitting.

use projection::EARTH_RADIUS_M;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Parameters of the Lambert Conformal fit that are not derived from the
/// native grid itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Radius of the spherical datum (meters).
    pub earth_radius: f64,

    /// Number of native cells of inward padding on each side. Must be at
    /// least 1 so the write grid stays strictly inside the footprint.
    pub margin_cells: u32,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            earth_radius: EARTH_RADIUS_M,
            margin_cells: 1,
        }
    }
}

impl FitConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("WRITE_GRID_EARTH_RADIUS") {
            if let Ok(radius) = val.parse() {
                config.earth_radius = radius;
            }
        }

        if let Ok(val) = std::env::var("WRITE_GRID_MARGIN_CELLS") {
            if let Ok(cells) = val.parse() {
                config.margin_cells = cells;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.earth_radius.is_finite() && self.earth_radius > 0.0) {
            return Err(GridError::InvalidConfig(format!(
                "earth_radius must be a positive number of meters, got {}",
                self.earth_radius
            )));
        }

        if self.margin_cells == 0 {
            return Err(GridError::InvalidConfig(
                "margin_cells must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FitConfig::default();
        assert_eq!(config.earth_radius, 6_371_000.0);
        assert_eq!(config.margin_cells, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = FitConfig::default();
        config.earth_radius = 0.0;
        assert!(config.validate().is_err());

        config.earth_radius = f64::NAN;
        assert!(config.validate().is_err());

        config = FitConfig::default();
        config.margin_cells = 0;
        assert!(matches!(
            config.validate(),
            Err(GridError::InvalidConfig(msg)) if msg.contains("margin_cells")
        ));
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: FitConfig = serde_json::from_str(r#"{"margin_cells": 3}"#).unwrap();
        assert_eq!(config.margin_cells, 3);
        assert_eq!(config.earth_radius, EARTH_RADIUS_M);
    }
}
