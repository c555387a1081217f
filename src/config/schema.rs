//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the demo
//! server. All types derive Serde traits for deserialization from config
//! files, and every section has defaults so a missing file means a fully
//! default server.

use serde::{Deserialize, Serialize};

use crate::simulation::LatencyRange;

/// Root configuration for the demo server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Latency ranges for the simulated sub-operations.
    pub latency: LatencyConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Uniform latency ranges for each kind of simulated operation.
///
/// The defaults match the distributions the demo was designed around:
/// database calls are the slow-ish inner spans, external-API calls the
/// slowest, and the named sub-operations short fillers between them.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LatencyConfig {
    /// Simulated database call latency.
    pub database: LatencyRange,

    /// Simulated external-API call latency.
    pub external_api: LatencyRange,

    /// Per-step delay for the named failing sub-operations on `/bad`.
    pub failed_operation: LatencyRange,

    /// Per-step delay for the auth sub-checks on `/admin`.
    pub auth_check: LatencyRange,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            database: LatencyRange::new(10, 100),
            external_api: LatencyRange::new(50, 250),
            failed_operation: LatencyRange::new(5, 25),
            auth_check: LatencyRange::new(5, 20),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.latency.database, LatencyRange::new(10, 100));
        assert_eq!(config.latency.external_api, LatencyRange::new(50, 250));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ServerConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:9090"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:9090");
        // Latency section absent, defaults apply
        assert_eq!(config.latency, LatencyConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config: ServerConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "0.0.0.0:8081"

            [latency]
            database = { min_ms = 1, max_ms = 2 }
            external_api = { min_ms = 3, max_ms = 4 }
            failed_operation = { min_ms = 5, max_ms = 6 }
            auth_check = { min_ms = 7, max_ms = 8 }
            "#,
        )
        .unwrap();

        assert_eq!(config.latency.database, LatencyRange::new(1, 2));
        assert_eq!(config.latency.auth_check, LatencyRange::new(7, 8));
    }
}
