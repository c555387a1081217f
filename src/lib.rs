//! Trace-Shaping Demo Server Library
//!
//! A small Axum/Tokio HTTP server whose handlers synthesize randomized
//! latency and fixed outcomes so that an external auto-instrumentation
//! agent has interesting request shapes to observe. The server itself
//! performs no tracing-backend calls.

pub mod config;
pub mod http;
pub mod simulation;

pub use config::ServerConfig;
pub use http::DemoServer;
