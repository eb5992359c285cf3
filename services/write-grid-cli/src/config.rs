//! Native grid description loaded from YAML.
//!
//! ```yaml
//! output_grid: lambert_conformal
//! native:
//!   lon_ctr: 262.5
//!   lat_ctr: 38.5
//!   dx: 3000.0
//!   dy: 3000.0
//!   octet:
//!     lon: [...]   # SW, S, SE, E, NE, N, NW, W
//!     lat: [...]
//! ```
//!
//! Instead of `octet`, a `mesh` section may give the vertex longitudes and
//! latitudes as nested rows, with an optional `index_order` (`ji` by
//! default).

use std::path::Path;

use anyhow::{bail, Context, Result};
use nalgebra::DMatrix;
use serde::Deserialize;
use tracing::{debug, info};

use write_grid::{mesh, CornerOctet, IndexOrder, NativeFootprint, WriteGridKind};

/// Root of the native grid file.
///
/// `output_grid` has no default: a file without it fails to load.
#[derive(Debug, Clone, Deserialize)]
pub struct WriteGridFile {
    pub output_grid: WriteGridKind,
    pub native: NativeSection,
}

/// Native grid center, cell size and footprint.
#[derive(Debug, Clone, Deserialize)]
pub struct NativeSection {
    pub lon_ctr: f64,
    pub lat_ctr: f64,
    pub dx: f64,
    pub dy: f64,
    #[serde(default)]
    pub octet: Option<CornerOctet>,
    #[serde(default)]
    pub mesh: Option<MeshSection>,
}

/// Vertex mesh given as nested rows.
#[derive(Debug, Clone, Deserialize)]
pub struct MeshSection {
    pub lon: Vec<Vec<f64>>,
    pub lat: Vec<Vec<f64>>,
    #[serde(default)]
    pub index_order: IndexOrder,
}

impl MeshSection {
    /// Vertex arrays as matrices, in the order given by `index_order`.
    pub fn matrices(&self) -> Result<(DMatrix<f64>, DMatrix<f64>)> {
        let lon = mesh::from_rows(&self.lon).context("Invalid mesh longitudes")?;
        let lat = mesh::from_rows(&self.lat).context("Invalid mesh latitudes")?;
        Ok((lon, lat))
    }
}

impl WriteGridFile {
    /// Load and parse a native grid file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading native grid file");
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(file)
    }

    /// Build the footprint passed to the fitter.
    ///
    /// An explicit octet wins over a mesh when both are present.
    pub fn to_footprint(&self) -> Result<NativeFootprint> {
        let native = &self.native;
        let octet = match (&native.octet, &native.mesh) {
            (Some(octet), _) => octet.clone(),
            (None, Some(mesh)) => {
                let (lon, lat) = mesh.matrices()?;
                info!(
                    rows = lon.nrows(),
                    cols = lon.ncols(),
                    index_order = %mesh.index_order,
                    "Deriving octet from vertex mesh"
                );
                CornerOctet::from_vertex_mesh(&lon, &lat, mesh.index_order)
                    .context("Failed to derive octet from mesh")?
            }
            (None, None) => bail!("native section needs either an `octet` or a `mesh`"),
        };

        NativeFootprint::new(native.lon_ctr, native.lat_ctr, octet, native.dx, native.dy)
            .context("Invalid native grid")
    }
}
