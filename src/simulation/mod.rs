//! Simulated-operation subsystem.
//!
//! # Data Flow
//! ```text
//! Handler step ("database", "external API", named sub-operation)
//!     → simulator.rs (pick the configured range, log the step)
//!     → latency.rs (sample a uniform delay)
//!     → tokio sleep (inline or detached)
//!     → fixed stand-in result back to the handler
//! ```
//!
//! # Design Decisions
//! - Delays stand in for real I/O; they exist only to shape trace spans
//! - Sampling sits behind a trait so tests can inject deterministic delays
//! - Inline sleeps die with the request future (client disconnect);
//!   detached sleeps run to completion regardless

pub mod latency;
pub mod simulator;

pub use latency::{DelaySampler, FixedSampler, LatencyRange, UniformSampler};
pub use simulator::Simulator;
