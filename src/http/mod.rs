//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routing, middleware)
//!     → request.rs (add x-request-id)
//!     → handlers.rs (simulated waits, fixed outcome)
//!     → response.rs (JSON envelope)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::MakeRequestUuid;
pub use response::{Envelope, ResponseStatus, User};
pub use server::{AppState, DemoServer};
