//! Forward/inverse transform seam shared by all projections.

use crate::error::{ProjectionError, ProjectionResult};

/// A map projection between geographic coordinates (degrees) and planar
/// coordinates (meters).
pub trait MapProjection {
    /// Geographic `(lon, lat)` to planar `(x, y)`.
    fn project(&self, lon: f64, lat: f64) -> ProjectionResult<(f64, f64)>;

    /// Planar `(x, y)` back to geographic `(lon, lat)`.
    fn unproject(&self, x: f64, y: f64) -> ProjectionResult<(f64, f64)>;

    /// Project a batch of points, failing on the first bad coordinate.
    fn project_all(&self, lons: &[f64], lats: &[f64]) -> ProjectionResult<Vec<(f64, f64)>> {
        if lons.len() != lats.len() {
            return Err(ProjectionError::LengthMismatch {
                lons: lons.len(),
                lats: lats.len(),
            });
        }
        lons.iter()
            .zip(lats)
            .map(|(&lon, &lat)| self.project(lon, lat))
            .collect()
    }
}
