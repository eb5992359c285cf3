//! Angle units and longitude range normalization.

use std::f64::consts::PI;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Longitude unit names accepted by the corner extractor.
pub const LON_UNIT_NAMES: [&str; 4] = ["deg", "degs", "rad", "rads"];

/// Unit of an angular coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Width of the longitude domain: 360 degrees or 2π radians.
    pub fn domain_size(self) -> f64 {
        match self {
            Self::Degrees => 360.0,
            Self::Radians => 2.0 * PI,
        }
    }

    /// Half the longitude domain: 180 degrees or π radians.
    pub fn half_domain(self) -> f64 {
        self.domain_size() / 2.0
    }

    /// Parse the short unit names used for mesh longitudes
    /// (`deg`, `degs`, `rad`, `rads`).
    pub fn from_lon_units(s: &str) -> Result<Self> {
        match s {
            "deg" | "degs" => Ok(Self::Degrees),
            "rad" | "rads" => Ok(Self::Radians),
            _ => Err(GridError::UnknownUnit {
                unit: s.to_string(),
                valid: LON_UNIT_NAMES
                    .iter()
                    .map(|u| format!("\"{}\"", u))
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Degrees => "degrees",
            Self::Radians => "radians",
        }
    }
}

impl FromStr for AngleUnit {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "degrees" | "degs" | "deg" => Ok(Self::Degrees),
            "radians" | "rads" | "rad" => Ok(Self::Radians),
            _ => Err(GridError::InvalidUnit {
                unit: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Map one longitude into `[min_value, min_value + W)` where `W` is the
/// domain size of `unit`.
///
/// Values already inside the range are returned unchanged, so applying
/// the function twice gives the same result as applying it once.
pub fn normalize_longitude(value: f64, min_value: f64, unit: AngleUnit) -> f64 {
    let width = unit.domain_size();
    let max_value = min_value + width;

    if !value.is_finite() || (value >= min_value && value < max_value) {
        return value;
    }

    let periods = ((value - min_value) / width).floor();
    let mut wrapped = value - periods * width;

    // Rounding in the subtraction can land one ulp outside the range.
    if wrapped >= max_value {
        wrapped -= width;
    }
    if wrapped < min_value {
        wrapped += width;
    }
    if wrapped >= max_value {
        wrapped = min_value;
    }
    wrapped
}

/// Map every longitude in `values` into `[min_value, min_value + W)`.
pub fn normalize_longitudes(values: &[f64], min_value: f64, unit: AngleUnit) -> Vec<f64> {
    values
        .iter()
        .map(|&v| normalize_longitude(v, min_value, unit))
        .collect()
}

/// Parse `unit` and normalize, failing with [`GridError::InvalidUnit`] on
/// an unrecognized unit name.
pub fn normalize_longitudes_str(values: &[f64], min_value: f64, unit: &str) -> Result<Vec<f64>> {
    let unit: AngleUnit = unit.parse()?;
    Ok(normalize_longitudes(values, min_value, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_parsing() {
        assert_eq!("degrees".parse::<AngleUnit>().unwrap(), AngleUnit::Degrees);
        assert_eq!("RADS".parse::<AngleUnit>().unwrap(), AngleUnit::Radians);
        assert!(matches!(
            "gradians".parse::<AngleUnit>(),
            Err(GridError::InvalidUnit { .. })
        ));
    }

    #[test]
    fn test_lon_units_vocabulary() {
        assert_eq!(AngleUnit::from_lon_units("degs").unwrap(), AngleUnit::Degrees);
        assert_eq!(AngleUnit::from_lon_units("rad").unwrap(), AngleUnit::Radians);
        // Long names belong to the normalizer, not the corner extractor.
        match AngleUnit::from_lon_units("degrees") {
            Err(GridError::UnknownUnit { unit, valid }) => {
                assert_eq!(unit, "degrees");
                assert!(valid.contains("\"rads\""));
            }
            other => panic!("expected UnknownUnit, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize_degrees() {
        let values = [-190.0, -180.0, 0.0, 179.5, 180.0, 540.0];
        let out = normalize_longitudes(&values, -180.0, AngleUnit::Degrees);
        assert_eq!(out, vec![170.0, -180.0, 0.0, 179.5, -180.0, -180.0]);
    }

    #[test]
    fn test_normalize_to_positive_range() {
        let out = normalize_longitudes(&[-97.5, 262.5, -460.0], 0.0, AngleUnit::Degrees);
        assert_eq!(out, vec![262.5, 262.5, 260.0]);
    }

    #[test]
    fn test_normalize_radians() {
        let out = normalize_longitudes(&[-PI - 0.5, 0.25, PI], -PI, AngleUnit::Radians);
        assert!((out[0] - (PI - 0.5)).abs() < 1e-12);
        assert_eq!(out[1], 0.25);
        assert!((out[2] + PI).abs() < 1e-12);
    }

    #[test]
    fn test_in_range_values_untouched() {
        let values = [0.1, -179.999_999_9, 12.345_678_9];
        let out = normalize_longitudes(&values, -180.0, AngleUnit::Degrees);
        assert_eq!(out, values.to_vec());
    }

    #[test]
    fn test_idempotent_and_in_range() {
        let values: Vec<f64> = (-2000..2000).map(|i| i as f64 * 0.37 - 0.001).collect();
        for &min in &[-180.0, 0.0, 17.25, -1e-9] {
            let once = normalize_longitudes(&values, min, AngleUnit::Degrees);
            let twice = normalize_longitudes(&once, min, AngleUnit::Degrees);
            assert_eq!(once, twice);
            for v in once {
                assert!(v >= min && v < min + 360.0, "{} outside [{}, {})", v, min, min + 360.0);
            }
        }
    }

    #[test]
    fn test_tiny_negative_offset_stays_half_open() {
        let v = normalize_longitude(-1e-20, 0.0, AngleUnit::Degrees);
        assert!(v >= 0.0 && v < 360.0, "got {}", v);
    }

    #[test]
    fn test_nan_passes_through() {
        assert!(normalize_longitude(f64::NAN, 0.0, AngleUnit::Degrees).is_nan());
    }

    #[test]
    fn test_string_unit_entry_point() {
        assert!(matches!(
            normalize_longitudes_str(&[0.0], 0.0, "turns"),
            Err(GridError::InvalidUnit { .. })
        ));
        assert_eq!(normalize_longitudes_str(&[-10.0], 0.0, "degrees").unwrap(), vec![350.0]);
    }
}
