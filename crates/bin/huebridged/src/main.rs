//! # huebridged: Hue bridge API daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse CLI arguments and load the YAML configuration (fatal on failure)
//! - Initialise `tracing` logging
//! - Construct the Hue bridge client (adapter) and inject it into the
//!   light service
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT) within the configured grace period
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod cli;
mod config;
mod shutdown;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use huebridge_adapter_http_axum::router::{self, DEFAULT_REQUEST_TIMEOUT};
use huebridge_adapter_http_axum::state::AppState;
use huebridge_adapter_hue::HueBridgeClient;
use huebridge_app::services::light_service::LightService;

use crate::cli::Cli;
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    // Bridge
    let bridge = HueBridgeClient::new(&config.hue_config())?;

    // Services
    let light_service = LightService::new(bridge);

    // HTTP
    let state = AppState::new(light_service);
    let app = router::build(state, DEFAULT_REQUEST_TIMEOUT);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        host = %config.server_host,
        port = config.server_port,
        bridge = %config.bridge_host,
        "huebridged listening on http://{bind_addr}"
    );

    shutdown::serve(listener, app, shutdown::interrupt(), cli.graceful_timeout).await?;
    tracing::info!("huebridged stopped");

    Ok(())
}
