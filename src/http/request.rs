//! Request ID generation.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) per inbound request
//! - Expose it as `x-request-id` on both request and response
//!
//! # Design Decisions
//! - Request ID added as early as possible so every log line and any
//!   observing tracer can correlate on it

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// UUID v4 `x-request-id` values for `SetRequestIdLayer`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let value = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_ids_are_unique() {
        let mut make = MakeRequestUuid;
        let req = Request::builder().body(Body::empty()).unwrap();

        let a = make.make_request_id(&req).unwrap();
        let b = make.make_request_id(&req).unwrap();
        assert_ne!(a.header_value(), b.header_value());
    }
}
