//! Response envelope and wire shapes.
//!
//! # Responsibilities
//! - Define the uniform `{status, message, data}` JSON envelope
//! - Define the static sample `User` records
//!
//! # Design Decisions
//! - `data` is omitted from the JSON entirely when absent
//! - Envelopes deserialize too, so tests can round-trip real responses

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Terminal outcome of a handler, serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
    Healthy,
}

/// The uniform JSON response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    pub fn success(message: impl Into<String>, data: Value) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>, data: Value) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn healthy(message: impl Into<String>, data: Value) -> Self {
        Self {
            status: ResponseStatus::Healthy,
            message: message.into(),
            data: Some(data),
        }
    }
}

/// A user record. Static sample data, no persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

impl User {
    /// The three hardcoded records every successful request returns.
    pub fn samples() -> Vec<User> {
        vec![
            User {
                id: 1,
                name: "Alice Johnson".to_string(),
            },
            User {
                id: 2,
                name: "Bob Smith".to_string(),
            },
            User {
                id: 3,
                name: "Charlie Brown".to_string(),
            },
        ]
    }
}
