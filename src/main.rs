//! Trace-Shaping Demo Server
//!
//! A deliberately small HTTP server built with Tokio and Axum. Each endpoint
//! performs simulated sub-operations (artificially delayed database and
//! external-API stand-ins) and terminates in a predetermined outcome, so an
//! eBPF auto-instrumentation agent watching the process produces traces with
//! interesting shape. Trace collection, storage, and visualization are all
//! external collaborators; this process only serves requests.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌─────────────────────────────────────────────┐
//!                    │                DEMO SERVER                   │
//!                    │                                              │
//!   Client Request   │  ┌─────────┐    ┌──────────┐    ┌─────────┐ │
//!   ─────────────────┼─▶│  http   │───▶│ handlers │───▶│simulation││
//!                    │  │ server  │    │ /good …  │    │  delays  ││
//!                    │  └─────────┘    └────┬─────┘    └─────────┘ │
//!                    │                      │                      │
//!   Client Response  │  ┌─────────┐        │                      │
//!   ◀────────────────┼──│envelope │◀───────┘                      │
//!                    │  │  JSON   │                               │
//!                    │  └─────────┘                               │
//!                    │                                              │
//!                    │  Cross-cutting: config, request IDs, tracing │
//!                    └─────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use otel_demo_server::config::{load_config, ServerConfig};
use otel_demo_server::http::DemoServer;

#[derive(Parser)]
#[command(name = "otel-demo-server")]
#[command(about = "Demo HTTP server that shapes distributed-trace data", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (built-in defaults when omitted).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind address (e.g. "0.0.0.0:8080").
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "otel_demo_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("otel-demo-server v{} starting", env!("CARGO_PKG_VERSION"));

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        database_latency = ?config.latency.database,
        external_api_latency = ?config.latency.external_api,
        "Configuration loaded"
    );

    // Bind TCP listener; a failed bind is the only startup crash condition.
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );
    tracing::info!("GET /        - service info");
    tracing::info!("GET /good    - returns 200 with success response");
    tracing::info!("GET /bad     - returns 500 with error response");
    tracing::info!("GET /admin   - returns 401 unauthorized");
    tracing::info!("GET /health  - health check endpoint");

    let server = DemoServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
