//! Mesh coordinate arrays and index-order handling.
//!
//! A mesh coordinate array holds one scalar (longitude or latitude) per
//! point of a logically rectangular mesh. Internally every array is
//! processed in (row = j, col = i) order; arrays stored with i as the
//! first axis are transposed on the way in.

use std::borrow::Cow;
use std::str::FromStr;

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Axis order of a mesh coordinate array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexOrder {
    /// First axis is i (x), second is j (y).
    Ij,
    /// First axis is j (y), second is i (x).
    #[default]
    Ji,
}

impl IndexOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ij => "ij",
            Self::Ji => "ji",
        }
    }
}

impl FromStr for IndexOrder {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ij" => Ok(Self::Ij),
            "ji" => Ok(Self::Ji),
            _ => Err(GridError::InvalidIndexOrder {
                order: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for IndexOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// View `coords` in (row = j, col = i) order.
pub fn canonical(coords: &DMatrix<f64>, order: IndexOrder) -> Cow<'_, DMatrix<f64>> {
    match order {
        IndexOrder::Ji => Cow::Borrowed(coords),
        IndexOrder::Ij => Cow::Owned(coords.transpose()),
    }
}

/// Fail unless `x` and `y` have the same (rows, cols) shape.
pub fn check_same_shape(x: &DMatrix<f64>, y: &DMatrix<f64>) -> Result<()> {
    if x.shape() != y.shape() {
        return Err(GridError::ShapeMismatch {
            x: x.shape(),
            y: y.shape(),
        });
    }
    Ok(())
}

/// Fail unless the mesh has at least two points along each axis.
pub fn check_has_perimeter(coords: &DMatrix<f64>) -> Result<()> {
    let (rows, cols) = coords.shape();
    if rows < 2 || cols < 2 {
        return Err(GridError::MeshTooSmall { rows, cols });
    }
    Ok(())
}

/// Build a mesh array from row-major nested rows, e.g. as read from a
/// config file.
pub fn from_rows(rows: &[Vec<f64>]) -> Result<DMatrix<f64>> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    if let Some(bad) = rows.iter().find(|r| r.len() != ncols) {
        return Err(GridError::ShapeMismatch {
            x: (nrows, ncols),
            y: (nrows, bad.len()),
        });
    }
    Ok(DMatrix::from_fn(nrows, ncols, |r, c| rows[r][c]))
}
