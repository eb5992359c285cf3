//! Write-grid derivation tool.
//!
//! Reads a native regional grid description (center, cell size and either
//! a corner/face-midpoint octet or the full vertex mesh), fits a Lambert
//! Conformal write grid inside its footprint and prints the grid
//! parameters as YAML.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use write_grid::{
    derive_write_grid, rect_grid_boundary, rect_grid_corners, CornerOptions, FitConfig,
};

use config::WriteGridFile;

#[derive(Parser, Debug)]
#[command(name = "make-write-grid")]
#[command(about = "Fit a Lambert Conformal write grid inside a native regional grid")]
struct Args {
    /// Native grid description (YAML)
    #[arg(short, long, env = "WRITE_GRID_CONFIG")]
    config: PathBuf,

    /// Write the grid parameters here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Also report the boundary and corners of a mesh input
    #[arg(long)]
    boundary: bool,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.json_logs)?;

    let fit_config = FitConfig::from_env();
    fit_config.validate().context("Invalid fit configuration")?;

    let file = WriteGridFile::load(&args.config)?;
    info!(
        config = %args.config.display(),
        output_grid = %file.output_grid,
        lon_ctr = file.native.lon_ctr,
        lat_ctr = file.native.lat_ctr,
        "Loaded native grid"
    );

    if args.boundary {
        report_mesh_outline(&file)?;
    }

    let footprint = file.to_footprint()?;
    let params = derive_write_grid(file.output_grid, &footprint, &fit_config)
        .context("Failed to derive write grid")?;

    info!(
        nx = params.nx,
        ny = params.ny,
        lon1 = params.lon1,
        lat1 = params.lat1,
        "Derived write grid"
    );

    let yaml = serde_yaml::to_string(&params).context("Failed to serialize grid parameters")?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, yaml)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Wrote write-grid parameters");
        }
        None => print!("{}", yaml),
    }

    Ok(())
}

/// Log the boundary length and corners of a mesh input.
fn report_mesh_outline(file: &WriteGridFile) -> Result<()> {
    let Some(mesh) = &file.native.mesh else {
        info!("No mesh in native grid description; skipping boundary report");
        return Ok(());
    };

    let (lon, lat) = mesh.matrices()?;
    let boundary = rect_grid_boundary(&lon, &lat, true, mesh.index_order)
        .context("Failed to extract mesh boundary")?;
    info!(points = boundary.len(), closed = boundary.closed, "Extracted mesh boundary");

    let opts = CornerOptions::lon_lat_degrees()
        .index_order(mesh.index_order)
        .verbose(true);
    rect_grid_corners(&lon, &lat, &opts).context("Failed to extract mesh corners")?;
    Ok(())
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}
