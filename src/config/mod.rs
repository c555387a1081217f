//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → injected into the HTTP server at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no hot reload for a demo process
//! - All fields have defaults so the server runs with no config file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{LatencyConfig, ListenerConfig, ServerConfig};
pub use validation::{validate_config, ValidationError};
