//! NRTR backend entry point

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use nrtr_server::{ApiServer, AppState, Datasets, ServerConfig, ServerResult, config};

/// Command line arguments; each one overrides its environment counterpart
#[derive(Parser, Debug)]
#[command(name = "nrtr-server")]
#[command(about = "HTTP API serving NRTR resource and opportunity listings")]
struct Args {
    /// Address to bind
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port for HTTP server
    #[arg(long)]
    port: Option<u16>,

    /// Directory containing the dataset JSON files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Debug mode: defaults logging to debug level
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> ServerResult<()> {
    // Load optional environment overrides from .env
    dotenv().ok();

    let args = Args::parse();

    // RUST_LOG wins over both the debug toggle and --log-level
    let debug = args.debug || config::debug_enabled();
    let default_level = if debug { "debug" } else { args.log_level.as_str() };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut config = ServerConfig::load()?;
    config.debug = debug;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }

    info!("Loading datasets from {}", config.data_dir.display());
    let datasets = Datasets::bootstrap(&config.data_dir)?;

    let server = ApiServer::new(AppState { config, datasets });
    server.run().await
}
