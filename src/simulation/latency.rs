//! Uniform latency ranges and delay sampling.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// An inclusive uniform sampling range in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LatencyRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl LatencyRange {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }
}

/// Source of simulated delays.
///
/// Production uses [`UniformSampler`]; tests substitute [`FixedSampler`] to
/// assert handler behavior without flaky timing.
pub trait DelaySampler: Send + Sync {
    fn sample(&self, range: LatencyRange) -> Duration;
}

/// Samples uniformly from the configured range using the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformSampler;

impl DelaySampler for UniformSampler {
    fn sample(&self, range: LatencyRange) -> Duration {
        let ms = if range.max_ms > range.min_ms {
            rand::thread_rng().gen_range(range.min_ms..=range.max_ms)
        } else {
            range.min_ms
        };
        Duration::from_millis(ms)
    }
}

/// Always returns the same delay, ignoring the range. Test helper.
#[derive(Debug, Clone, Copy)]
pub struct FixedSampler(pub u64);

impl DelaySampler for FixedSampler {
    fn sample(&self, _range: LatencyRange) -> Duration {
        Duration::from_millis(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_sampler_stays_in_range() {
        let range = LatencyRange::new(10, 100);
        let sampler = UniformSampler;

        for _ in 0..200 {
            let d = sampler.sample(range);
            assert!(d >= Duration::from_millis(10));
            assert!(d <= Duration::from_millis(100));
        }
    }

    #[test]
    fn test_uniform_sampler_degenerate_range() {
        let d = UniformSampler.sample(LatencyRange::new(50, 50));
        assert_eq!(d, Duration::from_millis(50));
    }

    #[test]
    fn test_fixed_sampler_ignores_range() {
        let sampler = FixedSampler(7);
        assert_eq!(
            sampler.sample(LatencyRange::new(10, 100)),
            Duration::from_millis(7)
        );
        assert_eq!(
            sampler.sample(LatencyRange::new(0, 0)),
            Duration::from_millis(7)
        );
    }
}
