//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use otel_demo_server::config::ServerConfig;
use otel_demo_server::http::DemoServer;
use otel_demo_server::simulation::{DelaySampler, FixedSampler};

/// Spawn the demo server on an ephemeral port with zero simulated delay.
pub async fn spawn_fast_server() -> SocketAddr {
    spawn_server(ServerConfig::default(), Arc::new(FixedSampler(0))).await
}

/// Spawn the demo server with the given config and sampler.
pub async fn spawn_server(config: ServerConfig, sampler: Arc<dyn DelaySampler>) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = DemoServer::with_sampler(config, sampler);

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// Non-pooled client so each test drives fresh connections.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
