//! Synthetic vertex meshes with predictable coordinates.
//!
//! All meshes are returned in (row = j, col = i) order: a mesh with
//! `nx` x `ny` cells has `ny + 1` rows and `nx + 1` columns.

use nalgebra::DMatrix;
use projection::{LambertConformal, MapProjection, EARTH_RADIUS_M};

/// Creates a mesh array with predictable, distinct values.
///
/// Each value is calculated as: `col * 1000 + row`
///
/// # Example
///
/// ```
/// use test_utils::create_indexed_mesh;
///
/// let mesh = create_indexed_mesh(4, 5);
/// assert_eq!(mesh.shape(), (4, 5));
/// assert_eq!(mesh[(0, 1)], 1000.0); // col=1, row=0
/// assert_eq!(mesh[(3, 0)], 3.0);    // col=0, row=3
/// ```
pub fn create_indexed_mesh(rows: usize, cols: usize) -> DMatrix<f64> {
    DMatrix::from_fn(rows, cols, |r, c| (c * 1000 + r) as f64)
}

/// Creates the vertex mesh of a regular lat/lon grid.
///
/// # Arguments
///
/// * `lon0`, `lat0` - Coordinates of the SW vertex (degrees)
/// * `dlon`, `dlat` - Vertex spacing (degrees)
/// * `nx`, `ny` - Number of cells
///
/// # Returns
///
/// `(lon, lat)` arrays of shape `(ny + 1, nx + 1)`.
pub fn create_latlon_vertex_mesh(
    lon0: f64,
    lat0: f64,
    dlon: f64,
    dlat: f64,
    nx: usize,
    ny: usize,
) -> (DMatrix<f64>, DMatrix<f64>) {
    let lon = DMatrix::from_fn(ny + 1, nx + 1, |_, i| lon0 + i as f64 * dlon);
    let lat = DMatrix::from_fn(ny + 1, nx + 1, |j, _| lat0 + j as f64 * dlat);
    (lon, lat)
}

/// Creates the vertex mesh of a grid that is regular in a tangent Lambert
/// Conformal plane centered on `(lon_ctr, lat_ctr)`.
///
/// The mesh is centered on the projection origin, so its vertices sit at
/// `x = (i - nx/2) * dx`, `y = (j - ny/2) * dy`. This mimics a native
/// regional grid whose write grid is known in advance.
///
/// # Panics
///
/// Panics if the projection cannot be built or a vertex cannot be
/// unprojected; intended for tests only.
pub fn create_lambert_vertex_mesh(
    lon_ctr: f64,
    lat_ctr: f64,
    dx: f64,
    dy: f64,
    nx: usize,
    ny: usize,
) -> (DMatrix<f64>, DMatrix<f64>) {
    let proj = LambertConformal::tangent(lon_ctr, lat_ctr, EARTH_RADIUS_M)
        .expect("valid Lambert test projection");

    let mut lon = DMatrix::zeros(ny + 1, nx + 1);
    let mut lat = DMatrix::zeros(ny + 1, nx + 1);
    for j in 0..=ny {
        for i in 0..=nx {
            let x = (i as f64 - nx as f64 / 2.0) * dx;
            let y = (j as f64 - ny as f64 / 2.0) * dy;
            let (vlon, vlat) = proj.unproject(x, y).expect("finite test vertex");
            lon[(j, i)] = vlon;
            lat[(j, i)] = vlat;
        }
    }
    (lon, lat)
}

/// Shift every longitude above `max_lon` down by 360 degrees, producing
/// the kind of branch cut seen in meshes that cross the antimeridian.
pub fn wrap_longitudes_above(lon: &DMatrix<f64>, max_lon: f64) -> DMatrix<f64> {
    lon.map(|v| if v > max_lon { v - 360.0 } else { v })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_mesh_values_are_distinct() {
        let mesh = create_indexed_mesh(6, 7);
        let mut values: Vec<f64> = mesh.iter().copied().collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        values.dedup();
        assert_eq!(values.len(), 42);
    }

    #[test]
    fn test_latlon_vertex_mesh_shape() {
        let (lon, lat) = create_latlon_vertex_mesh(-100.0, 30.0, 0.25, 0.5, 8, 4);
        assert_eq!(lon.shape(), (5, 9));
        assert_eq!(lat.shape(), (5, 9));
        assert_eq!(lon[(4, 8)], -98.0);
        assert_eq!(lat[(4, 8)], 32.0);
    }

    #[test]
    fn test_lambert_vertex_mesh_is_centered() {
        let (lon, lat) = create_lambert_vertex_mesh(262.5, 38.5, 3000.0, 3000.0, 10, 6);
        assert_eq!(lon.shape(), (7, 11));
        assert!((lon[(3, 5)] - 262.5).abs() < 1e-9);
        assert!((lat[(3, 5)] - 38.5).abs() < 1e-9);
        // West of center on the west edge, east on the east edge.
        assert!(lon[(3, 0)] < 262.5 && lon[(3, 10)] > 262.5);
    }

    #[test]
    fn test_wrap_longitudes_above() {
        let (lon, _) = create_latlon_vertex_mesh(179.0, 0.0, 1.0, 1.0, 2, 1);
        let wrapped = wrap_longitudes_above(&lon, 180.0);
        assert_eq!(wrapped[(0, 0)], 179.0);
        assert_eq!(wrapped[(0, 1)], 180.0);
        assert_eq!(wrapped[(0, 2)], -179.0);
    }
}
