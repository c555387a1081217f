//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (tracing, request ID)
//! - Bind the router to a listener and serve until shutdown

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::http::handlers;
use crate::http::request::MakeRequestUuid;
use crate::simulation::{DelaySampler, Simulator};

/// Application state injected into handlers.
///
/// Immutable after construction; handlers share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub simulator: Arc<Simulator>,
    pub started_at: Instant,
}

/// The demo HTTP server.
pub struct DemoServer {
    router: Router,
    config: ServerConfig,
}

impl DemoServer {
    /// Create a server with the production uniform-random delay sampler.
    pub fn new(config: ServerConfig) -> Self {
        let simulator = Simulator::new(config.latency.clone());
        Self::build(config, simulator)
    }

    /// Create a server with an injected delay sampler (used by tests).
    pub fn with_sampler(config: ServerConfig, sampler: Arc<dyn DelaySampler>) -> Self {
        let simulator = Simulator::with_sampler(config.latency.clone(), sampler);
        Self::build(config, simulator)
    }

    fn build(config: ServerConfig, simulator: Simulator) -> Self {
        let state = AppState {
            simulator: Arc::new(simulator),
            started_at: Instant::now(),
        };
        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::root))
            .route("/good", get(handlers::good))
            .route("/bad", get(handlers::bad))
            .route("/admin", get(handlers::admin))
            .route("/health", get(handlers::health))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        // Serve with graceful shutdown
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
