//! Error types for projection operations.

use thiserror::Error;

/// Result type for projection operations.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Errors raised while building or evaluating a projection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// A projection parameter is outside its valid range.
    #[error("invalid projection parameter '{name}': {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A coordinate passed to a transform was NaN or infinite.
    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteInput { x: f64, y: f64 },

    /// Longitude and latitude batches of different lengths.
    #[error("{lons} longitudes but {lats} latitudes")]
    LengthMismatch { lons: usize, lats: usize },

    /// The coordinate cannot be represented by this projection.
    #[error("coordinate outside projection domain: {0}")]
    OutOfDomain(String),
}
