//! Numlab API Server binary.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use numlab_api::{server::run_server, state::AppState, ServerConfig};
use tracing_subscriber::EnvFilter;

/// Numlab Numerical Methods REST API Server
#[derive(Parser, Debug)]
#[command(name = "numlab-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host address to bind to (overrides the config file)
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Dataset JSON file (overrides the config file)
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging; RUST_LOG takes precedence
    let filter = if args.verbose {
        "debug,numlab_math=trace,tower_http=debug"
    } else {
        "info,tower_http=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let mut config = match &args.config {
        Some(path) => {
            let path = path.to_string_lossy();
            tracing::info!("Loading configuration from {}", path);
            ServerConfig::from_file(&path)
                .with_context(|| format!("failed to load configuration {path}"))?
        }
        None => ServerConfig::default(),
    };

    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(dataset) = args.dataset {
        config.dataset_path = Some(dataset.to_string_lossy().into_owned());
    }

    let state = AppState::from_config(&config)?;

    run_server(state, &config.host, config.port).await
}
