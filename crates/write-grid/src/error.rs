//! Error types for write-grid derivation.

use projection::ProjectionError;
use thiserror::Error;

/// Errors that can occur while extracting grid geometry or fitting a
/// write grid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Angle unit not recognized by the longitude normalizer.
    #[error("invalid angle unit \"{unit}\"; allowed values are \"degrees\" and \"radians\"")]
    InvalidUnit { unit: String },

    /// Longitude unit not recognized by the corner extractor.
    #[error("unknown longitude units \"{unit}\"; valid values are {valid}")]
    UnknownUnit { unit: String, valid: String },

    /// The x and y coordinate arrays describe different meshes.
    #[error("x-coordinate dims {x:?} do not match y-coordinate dims {y:?}")]
    ShapeMismatch {
        x: (usize, usize),
        y: (usize, usize),
    },

    /// Index order string other than "ij" or "ji".
    #[error("index order must be \"ij\" or \"ji\", got \"{order}\"")]
    InvalidIndexOrder { order: String },

    /// Mesh has no perimeter to walk.
    #[error("mesh of {rows}x{cols} points is too small; at least 2x2 is required")]
    MeshTooSmall { rows: usize, cols: usize },

    /// A point could not be transformed by the write-grid projection.
    #[error("failed to project ({lon}, {lat}): {source}")]
    ProjectionFailure {
        lon: f64,
        lat: f64,
        #[source]
        source: ProjectionError,
    },

    /// A planar point could not be mapped back to geographic coordinates.
    #[error("failed to unproject ({x} m, {y} m): {source}")]
    UnprojectionFailure {
        x: f64,
        y: f64,
        #[source]
        source: ProjectionError,
    },

    /// The native footprint leaves no room for a write grid along an axis.
    #[error("degenerate write grid along {axis}: span {span:.3} m, cell size {cell_size} m")]
    DegenerateGrid {
        axis: char,
        span: f64,
        cell_size: f64,
    },

    /// Native cell sizes must be positive and finite.
    #[error("invalid native cell size dx={dx}, dy={dy}")]
    InvalidCellSize { dx: f64, dy: f64 },

    /// Write grid name not recognized.
    #[error("invalid write grid \"{name}\"; expected \"lambert_conformal\" or \"rotated_latlon\"")]
    InvalidWriteGrid { name: String },

    /// Write grid kind recognized but not derivable.
    #[error("write grid \"{kind}\" cannot be derived from a native footprint")]
    UnsupportedWriteGrid { kind: String },

    /// Invalid fit configuration.
    #[error("configuration error: {0}")]
    InvalidConfig(String),
}

/// Result type for write-grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
