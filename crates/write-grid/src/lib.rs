//! Write-grid derivation for regional model grids.
//!
//! Extracts the boundary and corners of a logically rectangular native
//! mesh and fits a Lambert Conformal output grid strictly inside its
//! footprint.
//!
//! # Architecture
//!
//! All entry points are pure functions over in-memory arrays:
//!
//! - [`normalize_longitudes`]: wrap longitudes into a half-open range
//! - [`rect_grid_corners`]: SW, SE, NE, NW corners of a vertex mesh
//! - [`rect_grid_boundary`]: counter-clockwise perimeter of a mesh
//! - [`CornerOctet::from_vertex_mesh`]: corner/face-midpoint octet
//! - [`fit_lambert_conformal`]: Lambert Conformal write grid from an octet
//!
//! Fit parameters that are not read from the native grid travel in an
//! explicit [`FitConfig`].

pub mod boundary;
pub mod config;
pub mod corners;
pub mod error;
pub mod lambert;
pub mod mesh;
pub mod octet;
pub mod params;
pub mod units;

// Re-exports
pub use boundary::{rect_grid_boundary, GridBoundary};
pub use config::FitConfig;
pub use corners::{rect_grid_corners, CornerOptions, GridCorners};
pub use error::{GridError, Result};
pub use lambert::{fit_lambert_conformal, lambert_projection, NativeFootprint};
pub use mesh::IndexOrder;
pub use octet::{mesh_center, CornerOctet, OctetPoint};
pub use params::{derive_write_grid, LambertGridParams, WriteGridKind};
pub use units::{normalize_longitude, normalize_longitudes, AngleUnit};
