//! Corner extraction for logically rectangular vertex meshes.

use nalgebra::DMatrix;
use tracing::info;

use crate::error::Result;
use crate::mesh::{canonical, check_has_perimeter, check_same_shape, IndexOrder};
use crate::units::AngleUnit;

/// Number of corners of a rectangular mesh.
pub const NUM_CORNERS: usize = 4;

/// Corner labels in output order.
pub const CORNER_NAMES: [&str; NUM_CORNERS] = ["SW", "SE", "NE", "NW"];

/// Options for [`rect_grid_corners`].
#[derive(Debug, Clone)]
pub struct CornerOptions {
    /// Units of the x coordinate, e.g. "deg" or "m".
    pub x_unit: String,
    /// Units of the y coordinate.
    pub y_unit: String,
    /// Wrap corner x values into (-180, 180] (or (-π, π]).
    pub x_is_longitude: bool,
    /// Log a human-readable corner summary.
    pub verbose: bool,
    /// Axis order of the vertex arrays.
    pub index_order: IndexOrder,
}

impl CornerOptions {
    /// Longitude/latitude in degrees with wrapping enabled.
    pub fn lon_lat_degrees() -> Self {
        Self {
            x_unit: "deg".to_string(),
            y_unit: "deg".to_string(),
            x_is_longitude: true,
            verbose: false,
            index_order: IndexOrder::Ji,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn index_order(mut self, index_order: IndexOrder) -> Self {
        self.index_order = index_order;
        self
    }
}

/// The four corners of a vertex mesh in SW, SE, NE, NW order.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCorners {
    pub x: [f64; NUM_CORNERS],
    pub y: [f64; NUM_CORNERS],
    pub x_unit: String,
    pub y_unit: String,
}

impl GridCorners {
    /// Human-readable listing of the corner coordinates.
    pub fn summary(&self) -> String {
        let mut msg = String::from("The specified grid's corner coordinates are:");
        for c in 0..NUM_CORNERS {
            msg.push_str(&format!(
                "\n  Corner {} ({}):  x = {:7.2} {};  y = {:7.2} {}",
                c + 1,
                CORNER_NAMES[c],
                self.x[c],
                self.x_unit,
                self.y[c],
                self.y_unit
            ));
        }
        msg
    }

    /// Corners as `(x, y)` pairs.
    pub fn points(&self) -> [(f64, f64); NUM_CORNERS] {
        std::array::from_fn(|c| (self.x[c], self.y[c]))
    }
}

/// (row, col) positions of the SW, SE, NE, NW corners of a mesh with
/// `rows` x `cols` points. Callers check the mesh has a perimeter first.
pub(crate) fn corner_positions(rows: usize, cols: usize) -> [(usize, usize); NUM_CORNERS] {
    let ny = rows - 1;
    let nx = cols - 1;
    [(0, 0), (0, nx), (ny, nx), (ny, 0)]
}

/// Extract the corner coordinates of a vertex mesh.
///
/// `x_verts` and `y_verts` are laid out per `opts.index_order` and must
/// have the same shape. When `x_is_longitude` is set, corner longitudes above
/// 180 degrees (π radians) are shifted down by one full turn.
pub fn rect_grid_corners(
    x_verts: &DMatrix<f64>,
    y_verts: &DMatrix<f64>,
    opts: &CornerOptions,
) -> Result<GridCorners> {
    let x_verts = canonical(x_verts, opts.index_order);
    let y_verts = canonical(y_verts, opts.index_order);
    check_same_shape(&x_verts, &y_verts)?;
    check_has_perimeter(&x_verts)?;

    let (rows, cols) = x_verts.shape();
    let positions = corner_positions(rows, cols);

    let mut x = [0.0; NUM_CORNERS];
    let mut y = [0.0; NUM_CORNERS];
    for (c, &(j, i)) in positions.iter().enumerate() {
        x[c] = x_verts[(j, i)];
        y[c] = y_verts[(j, i)];
    }

    if opts.x_is_longitude {
        let unit = AngleUnit::from_lon_units(&opts.x_unit)?;
        let max_lon_allowed = unit.half_domain();
        let lon_range = unit.domain_size();
        for lon in x.iter_mut() {
            if *lon > max_lon_allowed {
                *lon -= lon_range;
            }
        }
    }

    let corners = GridCorners {
        x,
        y,
        x_unit: opts.x_unit.clone(),
        y_unit: opts.y_unit.clone(),
    };

    if opts.verbose {
        info!("{}", corners.summary());
    }

    Ok(corners)
}
