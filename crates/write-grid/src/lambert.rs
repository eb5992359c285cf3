//! Lambert Conformal write-grid fitting.
//!
//! Given the center, corner/face-midpoint octet and cell size of a native
//! grid, find the largest Lambert Conformal grid with the native cell size
//! that lies inside the native footprint with a margin of whole cells.
//!
//! The fit works in the planar coordinates of a tangent-cone projection
//! centered on the native grid:
//!
//! 1. project the octet;
//! 2. take the tightest axis-aligned rectangle inside the projected
//!    west/east and south/north faces;
//! 3. pull every side in by the margin, and make the y-extent symmetric
//!    about the projection origin;
//! 4. snap each axis down to a whole number of cells, splitting the
//!    leftover evenly between both sides;
//! 5. unproject the center of the lower-left cell.

use projection::{LambertConformal, MapProjection};
use tracing::debug;

use crate::config::FitConfig;
use crate::error::{GridError, Result};
use crate::octet::{CornerOctet, OctetPoint};
use crate::params::{LambertGridParams, WriteGridKind};
use crate::units::{normalize_longitude, AngleUnit};

/// Geometry of a native grid as needed by the fitter.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeFootprint {
    /// Center longitude (degrees)
    pub lon_ctr: f64,
    /// Center latitude (degrees)
    pub lat_ctr: f64,
    /// Corner/face-midpoint octet
    pub octet: CornerOctet,
    /// Native cell size in x (meters)
    pub dx: f64,
    /// Native cell size in y (meters)
    pub dy: f64,
}

impl NativeFootprint {
    pub fn new(lon_ctr: f64, lat_ctr: f64, octet: CornerOctet, dx: f64, dy: f64) -> Result<Self> {
        let valid = |d: f64| d.is_finite() && d > 0.0;
        if !(valid(dx) && valid(dy)) {
            return Err(GridError::InvalidCellSize { dx, dy });
        }
        Ok(Self {
            lon_ctr,
            lat_ctr,
            octet,
            dx,
            dy,
        })
    }
}

/// The tangent Lambert Conformal projection the fitter works in: both
/// standard parallels and the origin at `lat_ctr`, central meridian at
/// `lon_ctr`.
pub fn lambert_projection(
    lon_ctr: f64,
    lat_ctr: f64,
    config: &FitConfig,
) -> Result<LambertConformal> {
    LambertConformal::tangent(lon_ctr, lat_ctr, config.earth_radius).map_err(|source| {
        GridError::ProjectionFailure {
            lon: lon_ctr,
            lat: lat_ctr,
            source,
        }
    })
}

/// Planar extent of a candidate write grid.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Extent {
    x_w: f64,
    x_e: f64,
    y_s: f64,
    y_n: f64,
}

/// Fit a Lambert Conformal write grid strictly inside the native footprint.
pub fn fit_lambert_conformal(
    native: &NativeFootprint,
    config: &FitConfig,
) -> Result<LambertGridParams> {
    config.validate()?;
    let NativeFootprint {
        lon_ctr,
        lat_ctr,
        dx,
        dy,
        ..
    } = *native;
    if !(dx.is_finite() && dx > 0.0 && dy.is_finite() && dy > 0.0) {
        return Err(GridError::InvalidCellSize { dx, dy });
    }

    let proj = lambert_projection(lon_ctr, lat_ctr, config)?;

    let mut xy = [(0.0, 0.0); 8];
    for point in OctetPoint::ALL {
        let (lon, lat) = native.octet.get(point);
        xy[point.index()] = proj
            .project(lon, lat)
            .map_err(|source| GridError::ProjectionFailure { lon, lat, source })?;
    }
    let x = |p: OctetPoint| xy[p.index()].0;
    let y = |p: OctetPoint| xy[p.index()].1;

    use OctetPoint::*;
    let x_w_native_max = x(SW).max(x(W)).max(x(NW));
    let x_e_native_min = x(SE).min(x(E)).min(x(NE));
    let y_s_native_max = y(SW).max(y(S)).max(y(SE));
    let y_n_native_min = y(NW).min(y(N)).min(y(NE));

    let margin = f64::from(config.margin_cells);
    let x_w = x_w_native_max + margin * dx;
    let x_e = x_e_native_min - margin * dx;
    let y_s = y_s_native_max + margin * dy;
    let y_n = y_n_native_min - margin * dy;

    if x_e <= x_w {
        return Err(GridError::DegenerateGrid {
            axis: 'x',
            span: x_e - x_w,
            cell_size: dx,
        });
    }
    // The symmetric y-extent is only inside the footprint when the
    // margined south and north faces straddle the projection origin.
    if y_s >= 0.0 || y_n <= 0.0 {
        return Err(GridError::DegenerateGrid {
            axis: 'y',
            span: y_n - y_s,
            cell_size: dy,
        });
    }
    let y_s = -y_s.abs().min(y_n.abs());
    let y_n = -y_s;

    let (nx, x_w, x_e) = snap_axis('x', x_w, x_e, dx)?;
    let (ny, y_s, y_n) = snap_axis('y', y_s, y_n, dy)?;
    let extent = Extent { x_w, x_e, y_s, y_n };

    let x_ctr_ll = extent.x_w + 0.5 * dx;
    let y_ctr_ll = extent.y_s + 0.5 * dy;
    let (lon1, lat1) = unproject(&proj, x_ctr_ll, y_ctr_ll)?;
    let lon1 = normalize_longitude(lon1, lon_ctr - 180.0, AngleUnit::Degrees);

    let params = LambertGridParams {
        output_grid: WriteGridKind::LambertConformal,
        cen_lon: lon_ctr,
        cen_lat: lat_ctr,
        stdlat1: lat_ctr,
        stdlat2: lat_ctr,
        nx,
        ny,
        lon1,
        lat1,
        dx,
        dy,
    };

    debug!(
        nx = params.nx,
        ny = params.ny,
        lon1 = params.lon1,
        lat1 = params.lat1,
        x_w = extent.x_w,
        x_e = extent.x_e,
        y_s = extent.y_s,
        y_n = extent.y_n,
        "Fitted Lambert Conformal write grid"
    );

    Ok(params)
}

fn unproject(proj: &impl MapProjection, x: f64, y: f64) -> Result<(f64, f64)> {
    proj.unproject(x, y)
        .map_err(|source| GridError::UnprojectionFailure { x, y, source })
}

/// Snap `[lo, hi]` to a whole number of cells, trimming the leftover
/// fraction evenly from both ends.
fn snap_axis(axis: char, lo: f64, hi: f64, cell: f64) -> Result<(usize, f64, f64)> {
    let span_cells = (hi - lo) / cell;
    let n = span_cells.floor();
    if !(n >= 1.0) {
        return Err(GridError::DegenerateGrid {
            axis,
            span: hi - lo,
            cell_size: cell,
        });
    }
    let adj = 0.5 * (span_cells - n) * cell;
    Ok((n as usize, lo + adj, hi - adj))
}
