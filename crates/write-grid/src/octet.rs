//! Corner and face-midpoint octet of a native grid.
//!
//! The octet is the contract between a native-grid reader and the Lambert
//! fitter: eight points on the outer face of the grid, always in the order
//! SW, S, SE, E, NE, N, NW, W.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::corners::corner_positions;
use crate::error::Result;
use crate::mesh::{canonical, check_has_perimeter, check_same_shape, IndexOrder};
use crate::units::{normalize_longitude, AngleUnit};

/// Position of a point in the octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OctetPoint {
    SW,
    S,
    SE,
    E,
    NE,
    N,
    NW,
    W,
}

impl OctetPoint {
    /// All positions in octet order.
    pub const ALL: [OctetPoint; 8] = [
        Self::SW,
        Self::S,
        Self::SE,
        Self::E,
        Self::NE,
        Self::N,
        Self::NW,
        Self::W,
    ];

    /// Index of this position in the octet arrays.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Longitudes and latitudes (degrees) of the eight octet points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CornerOctet {
    pub lon: [f64; 8],
    pub lat: [f64; 8],
}

impl CornerOctet {
    pub fn new(lon: [f64; 8], lat: [f64; 8]) -> Self {
        Self { lon, lat }
    }

    /// `(lon, lat)` of one octet position.
    pub fn get(&self, point: OctetPoint) -> (f64, f64) {
        (self.lon[point.index()], self.lat[point.index()])
    }

    /// Derive the octet from a vertex mesh in degrees.
    ///
    /// Corners are the mesh corners. Face midpoints are the middle vertex
    /// of each edge, or the mean of the two middle vertices when the edge
    /// has an even number of vertices. Longitudes are placed on the same
    /// 360-degree branch as the SW corner.
    pub fn from_vertex_mesh(
        lon_verts: &DMatrix<f64>,
        lat_verts: &DMatrix<f64>,
        index_order: IndexOrder,
    ) -> Result<Self> {
        let lon = canonical(lon_verts, index_order);
        let lat = canonical(lat_verts, index_order);
        check_same_shape(&lon, &lat)?;
        check_has_perimeter(&lon)?;

        let (rows, cols) = lon.shape();
        let [sw, se, ne, nw] = corner_positions(rows, cols);
        let (ny, nx) = ne;

        let lon_min = lon[sw] - 180.0;
        let lon_at = |p: (usize, usize)| normalize_longitude(lon[p], lon_min, AngleUnit::Degrees);
        let lat_at = |p: (usize, usize)| lat[p];

        let (i_lo, i_hi) = middle(cols);
        let (j_lo, j_hi) = middle(rows);
        let midpoint = |a: (usize, usize), b: (usize, usize)| {
            (
                0.5 * (lon_at(a) + lon_at(b)),
                0.5 * (lat_at(a) + lat_at(b)),
            )
        };

        let points = [
            (lon_at(sw), lat_at(sw)),
            midpoint((0, i_lo), (0, i_hi)),
            (lon_at(se), lat_at(se)),
            midpoint((j_lo, nx), (j_hi, nx)),
            (lon_at(ne), lat_at(ne)),
            midpoint((ny, i_lo), (ny, i_hi)),
            (lon_at(nw), lat_at(nw)),
            midpoint((j_lo, 0), (j_hi, 0)),
        ];

        let octet = Self {
            lon: points.map(|p| p.0),
            lat: points.map(|p| p.1),
        };
        debug!(lon = ?octet.lon, lat = ?octet.lat, "Derived corner/face-midpoint octet");
        Ok(octet)
    }
}

/// Center `(lon, lat)` of a mesh: the middle vertex, or the mean of the
/// two or four central vertices.
pub fn mesh_center(
    lon_verts: &DMatrix<f64>,
    lat_verts: &DMatrix<f64>,
    index_order: IndexOrder,
) -> Result<(f64, f64)> {
    let lon = canonical(lon_verts, index_order);
    let lat = canonical(lat_verts, index_order);
    check_same_shape(&lon, &lat)?;
    check_has_perimeter(&lon)?;

    let (rows, cols) = lon.shape();
    let (j_lo, j_hi) = middle(rows);
    let (i_lo, i_hi) = middle(cols);
    let lon_min = lon[(j_lo, i_lo)] - 180.0;

    let mut sum_lon = 0.0;
    let mut sum_lat = 0.0;
    let mut count = 0.0;
    for j in [j_lo, j_hi] {
        for i in [i_lo, i_hi] {
            sum_lon += normalize_longitude(lon[(j, i)], lon_min, AngleUnit::Degrees);
            sum_lat += lat[(j, i)];
            count += 1.0;
        }
    }
    Ok((sum_lon / count, sum_lat / count))
}

/// The one or two middle indices of `0..n`.
fn middle(n: usize) -> (usize, usize) {
    if n % 2 == 1 {
        (n / 2, n / 2)
    } else {
        (n / 2 - 1, n / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regular(
        rows: usize,
        cols: usize,
        lon0: f64,
        lat0: f64,
        step: f64,
    ) -> (DMatrix<f64>, DMatrix<f64>) {
        let lon = DMatrix::from_fn(rows, cols, |_, c| lon0 + c as f64 * step);
        let lat = DMatrix::from_fn(rows, cols, |r, _| lat0 + r as f64 * step);
        (lon, lat)
    }

    #[test]
    fn test_octet_order() {
        assert_eq!(OctetPoint::ALL.len(), 8);
        for (k, p) in OctetPoint::ALL.iter().enumerate() {
            assert_eq!(p.index(), k);
        }
        assert_eq!(OctetPoint::E.index(), 3);
        assert_eq!(OctetPoint::W.index(), 7);
    }

    #[test]
    fn test_from_odd_mesh() {
        let (lon, lat) = regular(5, 5, 10.0, 40.0, 0.5);
        let octet = CornerOctet::from_vertex_mesh(&lon, &lat, IndexOrder::Ji).unwrap();
        assert_eq!(octet.get(OctetPoint::SW), (10.0, 40.0));
        assert_eq!(octet.get(OctetPoint::S), (11.0, 40.0));
        assert_eq!(octet.get(OctetPoint::SE), (12.0, 40.0));
        assert_eq!(octet.get(OctetPoint::E), (12.0, 41.0));
        assert_eq!(octet.get(OctetPoint::NE), (12.0, 42.0));
        assert_eq!(octet.get(OctetPoint::N), (11.0, 42.0));
        assert_eq!(octet.get(OctetPoint::NW), (10.0, 42.0));
        assert_eq!(octet.get(OctetPoint::W), (10.0, 41.0));
    }

    #[test]
    fn test_from_even_mesh_averages_midpoints() {
        let (lon, lat) = regular(4, 6, 0.0, 0.0, 1.0);
        let octet = CornerOctet::from_vertex_mesh(&lon, &lat, IndexOrder::Ji).unwrap();
        assert_eq!(octet.get(OctetPoint::S), (2.5, 0.0));
        assert_eq!(octet.get(OctetPoint::E), (5.0, 1.5));
    }

    #[test]
    fn test_ij_mesh_matches_ji() {
        let (lon, lat) = regular(4, 6, 0.0, 0.0, 1.0);
        let ji = CornerOctet::from_vertex_mesh(&lon, &lat, IndexOrder::Ji).unwrap();
        let ij = CornerOctet::from_vertex_mesh(&lon.transpose(), &lat.transpose(), IndexOrder::Ij)
            .unwrap();
        assert_eq!(ji, ij);
    }

    #[test]
    fn test_dateline_mesh_is_continuous() {
        let (mut lon, lat) = regular(3, 3, 179.0, 0.0, 1.0);
        lon.iter_mut().for_each(|v| {
            if *v >= 180.0 {
                *v -= 360.0;
            }
        });
        let octet = CornerOctet::from_vertex_mesh(&lon, &lat, IndexOrder::Ji).unwrap();
        assert_eq!(octet.get(OctetPoint::SE).0, 181.0);
        assert_eq!(octet.get(OctetPoint::S).0, 180.0);
    }

    #[test]
    fn test_mesh_center() {
        let (lon, lat) = regular(5, 5, 10.0, 40.0, 0.5);
        assert_eq!(mesh_center(&lon, &lat, IndexOrder::Ji).unwrap(), (11.0, 41.0));

        let (lon, lat) = regular(4, 4, 0.0, 0.0, 1.0);
        assert_eq!(mesh_center(&lon, &lat, IndexOrder::Ji).unwrap(), (1.5, 1.5));
    }
}
