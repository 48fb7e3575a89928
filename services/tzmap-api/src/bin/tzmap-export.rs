//! Writes the overlay documents to disk for static hosting.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use tz_common::parse_instant;
use tz_geojson::load_dataset;
use tzmap_api::config::{MapConfig, DEFAULT_CONFIG_PATH};
use tzmap_api::export::export_all;

#[derive(Parser, Debug)]
#[command(name = "tzmap-export")]
#[command(about = "Export band, label, timezone and layer documents")]
struct Args {
    /// Path to the YAML config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, env = "TZMAP_CONFIG")]
    config: PathBuf,

    /// Timezone boundary GeoJSON (overrides `dataset_path` in the config)
    #[arg(long, env = "TZMAP_DATASET")]
    dataset: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "out")]
    out_dir: PathBuf,

    /// Instant to evaluate offsets at (RFC 3339, date, or `now`)
    #[arg(long, default_value = "now")]
    at: String,

    /// Palette override: `offset` or `zone`
    #[arg(long)]
    mode: Option<palette::ColorMode>,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt().with_env_filter(filter).with_target(false).init();

    let mut config = MapConfig::load(&args.config)?.with_dataset_override(args.dataset);
    if let Some(mode) = args.mode {
        config.color_mode = mode;
    }

    let at = parse_instant(&args.at).with_context(|| format!("Invalid --at: {}", args.at))?;

    let dataset = config
        .dataset_path
        .as_ref()
        .map(|path| {
            load_dataset(path).with_context(|| format!("Failed to load dataset: {:?}", path))
        })
        .transpose()?;

    let written = export_all(&config, dataset.as_ref(), at, &args.out_dir)?;
    info!(
        files = written.len(),
        out_dir = %args.out_dir.display(),
        "Export complete"
    );
    Ok(())
}
