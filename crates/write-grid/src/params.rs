//! Write-grid kinds and parameter records.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::FitConfig;
use crate::error::{GridError, Result};
use crate::lambert::{fit_lambert_conformal, NativeFootprint};

/// Kind of write grid requested for model output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteGridKind {
    LambertConformal,
    RotatedLatlon,
}

impl WriteGridKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LambertConformal => "lambert_conformal",
            Self::RotatedLatlon => "rotated_latlon",
        }
    }
}

impl FromStr for WriteGridKind {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lambert_conformal" => Ok(Self::LambertConformal),
            "rotated_latlon" => Ok(Self::RotatedLatlon),
            _ => Err(GridError::InvalidWriteGrid {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for WriteGridKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameters of a Lambert Conformal write grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LambertGridParams {
    /// Always [`WriteGridKind::LambertConformal`]
    pub output_grid: WriteGridKind,
    /// Center longitude (degrees)
    pub cen_lon: f64,
    /// Center latitude (degrees)
    pub cen_lat: f64,
    /// First standard parallel (degrees)
    pub stdlat1: f64,
    /// Second standard parallel (degrees)
    pub stdlat2: f64,
    /// Number of cells in x
    pub nx: usize,
    /// Number of cells in y
    pub ny: usize,
    /// Longitude of the lower-left cell center (degrees)
    pub lon1: f64,
    /// Latitude of the lower-left cell center (degrees)
    pub lat1: f64,
    /// Cell size in x (meters)
    pub dx: f64,
    /// Cell size in y (meters)
    pub dy: f64,
}

/// Derive the write grid of the requested kind from a native footprint.
///
/// Only Lambert Conformal grids can be derived; rotated lat-lon requests
/// fail with [`GridError::UnsupportedWriteGrid`].
pub fn derive_write_grid(
    kind: WriteGridKind,
    native: &NativeFootprint,
    config: &FitConfig,
) -> Result<LambertGridParams> {
    match kind {
        WriteGridKind::LambertConformal => fit_lambert_conformal(native, config),
        WriteGridKind::RotatedLatlon => Err(GridError::UnsupportedWriteGrid {
            kind: kind.to_string(),
        }),
    }
}
