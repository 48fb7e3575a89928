//! tzmap API Server
//!
//! Serves the UTC band overlay, augmented timezone polygons and layer styles
//! for the timezone map.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use tzmap_api::config::{MapConfig, DEFAULT_CONFIG_PATH};
use tzmap_api::routes::build_router;
use tzmap_api::state::AppState;

/// tzmap API Server
#[derive(Parser, Debug)]
#[command(name = "tzmap-api")]
#[command(about = "HTTP server for the timezone map overlay")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8090", env = "TZMAP_LISTEN_ADDR")]
    listen: String,

    /// Path to the YAML config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, env = "TZMAP_CONFIG")]
    config: PathBuf,

    /// Timezone boundary GeoJSON (overrides `dataset_path` in the config)
    #[arg(long, env = "TZMAP_DATASET")]
    dataset: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "TZMAP_WORKER_THREADS")]
    worker_threads: Option<usize>,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .context("Failed to create Tokio runtime")?;

    runtime.block_on(run_server(args))
}

async fn run_server(args: Args) -> Result<()> {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    // Initialize Prometheus metrics exporter
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    info!("Starting tzmap API server");

    let config = MapConfig::load(&args.config)?.with_dataset_override(args.dataset);
    let state = Arc::new(AppState::new(config).with_metrics(prometheus_handle));

    let app = build_router(state);

    let addr: SocketAddr = args
        .listen
        .parse()
        .with_context(|| format!("Invalid listen address: {}", args.listen))?;

    info!("tzmap API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
