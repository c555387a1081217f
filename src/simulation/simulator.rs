//! Simulated database and external-API operations.
//!
//! Each method logs the step it stands in for and then waits a sampled
//! delay. Nothing here can actually fail; the "failures" exist purely so
//! the process execution looks like a service doing real (and sometimes
//! broken) work.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::{json, Value};

use crate::config::LatencyConfig;
use crate::simulation::latency::{DelaySampler, UniformSampler};

/// Executes simulated sub-operations with configurable latency.
pub struct Simulator {
    latency: LatencyConfig,
    sampler: Arc<dyn DelaySampler>,
}

impl Simulator {
    /// Create a simulator with the production uniform-random sampler.
    pub fn new(latency: LatencyConfig) -> Self {
        Self::with_sampler(latency, Arc::new(UniformSampler))
    }

    /// Create a simulator with an injected delay sampler.
    pub fn with_sampler(latency: LatencyConfig, sampler: Arc<dyn DelaySampler>) -> Self {
        Self { latency, sampler }
    }

    /// Simulated database call.
    ///
    /// The sleep is awaited inline, so a dropped request future (client
    /// disconnect) cancels the wait together with the handler.
    pub async fn database(&self, operation: &str) {
        let latency = self.sampler.sample(self.latency.database);
        tracing::debug!(
            operation = %operation,
            latency = ?latency,
            "Database operation"
        );
        tokio::time::sleep(latency).await;
    }

    /// Simulated external-API call. Returns a stand-in payload.
    pub async fn external_api(&self, endpoint: &str) -> Value {
        let latency = self.sampler.sample(self.latency.external_api);
        tracing::debug!(
            endpoint = %endpoint,
            latency = ?latency,
            "Calling external API"
        );
        tokio::time::sleep(latency).await;

        json!({
            "external_data": format!("Data from {endpoint}"),
            "timestamp": Utc::now().timestamp(),
        })
    }

    /// A named sub-operation that "fails". Log-only; the delay runs to
    /// completion even if the client has gone away.
    pub async fn failed_operation(&self, name: &str) {
        let delay = self.sampler.sample(self.latency.failed_operation);
        tracing::warn!(operation = %name, delay = ?delay, "Operation failed");
        detached_sleep(delay).await;
    }

    /// A named auth sub-check. Same detached shape as [`failed_operation`],
    /// shorter delays.
    ///
    /// [`failed_operation`]: Simulator::failed_operation
    pub async fn auth_check(&self, name: &str) {
        let delay = self.sampler.sample(self.latency.auth_check);
        tracing::debug!(check = %name, delay = ?delay, "Auth operation");
        detached_sleep(delay).await;
    }
}

/// Sleep on a spawned task so the delay completes even when the awaiting
/// request future is dropped mid-wait.
async fn detached_sleep(delay: Duration) {
    let _ = tokio::spawn(tokio::time::sleep(delay)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::latency::FixedSampler;

    fn fast_simulator() -> Simulator {
        Simulator::with_sampler(LatencyConfig::default(), Arc::new(FixedSampler(0)))
    }

    #[tokio::test]
    async fn test_external_api_payload_names_endpoint() {
        let sim = fast_simulator();
        let payload = sim.external_api("https://api.example.com/status").await;

        let data = payload["external_data"].as_str().unwrap();
        assert_eq!(data, "Data from https://api.example.com/status");
        assert!(payload["timestamp"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_steps_complete_with_zero_delay() {
        let sim = fast_simulator();
        sim.database("SELECT 1").await;
        sim.failed_operation("check_rate_limits").await;
        sim.auth_check("validate_token_format").await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_database_waits_sampled_delay() {
        let sim = Simulator::with_sampler(LatencyConfig::default(), Arc::new(FixedSampler(40)));

        let start = tokio::time::Instant::now();
        sim.database("SELECT users WHERE active=true").await;
        assert_eq!(start.elapsed(), Duration::from_millis(40));
    }
}
