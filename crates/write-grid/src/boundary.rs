//! Perimeter extraction for logically rectangular meshes.
//!
//! The boundary is walked counter-clockwise starting at point (j=0, i=0):
//! south edge west to east, east edge south to north, north edge east to
//! west, then west edge north to south. Each point is emitted once, so an
//! open boundary of a mesh with `rows` x `cols` points has
//! `2 * (rows + cols) - 4` points.

use nalgebra::DMatrix;

use crate::error::Result;
use crate::mesh::{canonical, check_has_perimeter, check_same_shape, IndexOrder};

/// Ordered boundary coordinates of a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct GridBoundary {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Whether the first point is repeated at the end.
    pub closed: bool,
}

impl GridBoundary {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` pairs in traversal order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// (row, col) positions of the perimeter of a `rows` x `cols` mesh in
/// traversal order, without the closing repeat.
pub fn boundary_positions(rows: usize, cols: usize) -> Vec<(usize, usize)> {
    if rows < 2 || cols < 2 {
        return Vec::new();
    }
    let mut positions = Vec::with_capacity(2 * (rows + cols) - 4);

    // South edge, including the starting corner.
    positions.extend((0..cols).map(|i| (0, i)));
    // East edge
    positions.extend((1..rows).map(|j| (j, cols - 1)));
    // North edge, east to west
    positions.extend((0..cols - 1).rev().map(|i| (rows - 1, i)));
    // West edge, north to south, stopping short of the starting corner
    positions.extend((1..rows - 1).rev().map(|j| (j, 0)));

    positions
}

/// Extract the ordered boundary of a mesh.
///
/// With `repeat_last_point` the first point is appended again so the
/// result can be drawn as a closed polyline.
pub fn rect_grid_boundary(
    x_coords: &DMatrix<f64>,
    y_coords: &DMatrix<f64>,
    repeat_last_point: bool,
    index_order: IndexOrder,
) -> Result<GridBoundary> {
    let x = canonical(x_coords, index_order);
    let y = canonical(y_coords, index_order);
    check_same_shape(&x, &y)?;
    check_has_perimeter(&x)?;

    let (rows, cols) = x.shape();
    let positions = boundary_positions(rows, cols);

    let capacity = positions.len() + usize::from(repeat_last_point);
    let mut x_bdy = Vec::with_capacity(capacity);
    let mut y_bdy = Vec::with_capacity(capacity);
    for &(j, i) in &positions {
        x_bdy.push(x[(j, i)]);
        y_bdy.push(y[(j, i)]);
    }

    if repeat_last_point {
        x_bdy.push(x_bdy[0]);
        y_bdy.push(y_bdy[0]);
    }

    Ok(GridBoundary {
        x: x_bdy,
        y: y_bdy,
        closed: repeat_last_point,
    })
}
