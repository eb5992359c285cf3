//! Coordinate reference system transformations.
//!
//! Implements the spherical projections needed to derive write grids
//! without depending on an external geodesy library.

pub mod error;
pub mod lambert;
pub mod transform;

pub use error::{ProjectionError, ProjectionResult};
pub use lambert::{LambertConformal, EARTH_RADIUS_M};
pub use transform::MapProjection;
