//! # huebridge-statics
//!
//! Serves the web frontend's static files from `../static`.

mod config;

use std::path::{Path, PathBuf};

use axum::Router;
use clap::Parser;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Directory served, relative to the working directory.
const STATIC_ROOT: &str = "../static";

/// Static file server for the huebridge web frontend.
#[derive(Debug, Parser)]
#[command(name = "huebridge-statics", version, about)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long, default_value = config::DEFAULT_PATH)]
    config: PathBuf,
}

/// Router serving `root`, with `index.html` for directory requests.
fn app(root: impl AsRef<Path>) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(root).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
}

/// Resolves on the first SIGINT. In-flight responses are then drained
/// without a deadline.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for interrupt signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        host = %config.server_host,
        port = config.server_port,
        root = STATIC_ROOT,
        "listening"
    );

    axum::serve(listener, app(STATIC_ROOT))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
