//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (latency ranges are ordered and non-zero)
//! - Check the bind address parses as a socket address
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServerConfig;
use crate::simulation::LatencyRange;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("latency range '{name}' has max_ms ({max_ms}) below min_ms ({min_ms})")]
    InvertedRange {
        name: &'static str,
        min_ms: u64,
        max_ms: u64,
    },

    #[error("latency range '{0}' must allow a non-zero delay")]
    ZeroRange(&'static str),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let ranges: [(&'static str, LatencyRange); 4] = [
        ("database", config.latency.database),
        ("external_api", config.latency.external_api),
        ("failed_operation", config.latency.failed_operation),
        ("auth_check", config.latency.auth_check),
    ];

    for (name, range) in ranges {
        if range.max_ms < range.min_ms {
            errors.push(ValidationError::InvertedRange {
                name,
                min_ms: range.min_ms,
                max_ms: range.max_ms,
            });
        } else if range.max_ms == 0 {
            errors.push(ValidationError::ZeroRange(name));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.latency.database = LatencyRange::new(100, 10);
        config.latency.auth_check = LatencyRange::new(0, 0);

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidBindAddress(_))));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvertedRange { name: "database", .. })));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::ZeroRange("auth_check"))));
    }

    #[test]
    fn test_degenerate_range_is_valid() {
        // min == max is a fixed delay, which is allowed
        let mut config = ServerConfig::default();
        config.latency.database = LatencyRange::new(50, 50);
        assert!(validate_config(&config).is_ok());
    }
}
