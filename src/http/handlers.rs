//! Endpoint handlers.
//!
//! Each handler is a single linear sequence of simulated wait/log steps
//! ending in a fixed outcome. Nothing a simulated operation returns can
//! change the terminal status code; the one exception is a client
//! disconnect, which drops the request future mid-wait and so produces no
//! response at all.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use chrono::Utc;
use serde_json::json;

use crate::http::response::{Envelope, User};
use crate::http::server::AppState;

/// `GET /` — service info.
pub async fn root() -> Json<Envelope> {
    Json(Envelope::success(
        "OpenTelemetry Demo Server",
        json!({
            "endpoints": ["/good", "/bad", "/admin", "/health"],
            "version": env!("CARGO_PKG_VERSION"),
        }),
    ))
}

/// `GET /good` — simulated work that always succeeds.
pub async fn good(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> (StatusCode, Json<Envelope>) {
    tracing::info!(client = %addr, "Processing good request");

    // Cancellable: a disconnect during this wait drops the handler and no
    // 200 is ever produced.
    state
        .simulator
        .database("SELECT users WHERE active=true")
        .await;

    let external_data = state
        .simulator
        .external_api("https://api.example.com/status")
        .await;

    let envelope = Envelope::success(
        "Request processed successfully",
        json!({
            "users": User::samples(),
            "external_data": external_data,
            "processed_at": Utc::now().to_rfc3339(),
        }),
    );

    tracing::info!("Successfully processed good request");
    (StatusCode::OK, Json(envelope))
}

/// `GET /bad` — simulated work that always ends in a 500.
pub async fn bad(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> (StatusCode, Json<Envelope>) {
    tracing::info!(client = %addr, "Processing bad request");

    // Outcome ignored; this wait only shapes the trace.
    state
        .simulator
        .database("SELECT * FROM non_existent_table")
        .await;

    for operation in [
        "validate_user_permissions",
        "check_rate_limits",
        "process_payment",
    ] {
        state.simulator.failed_operation(operation).await;
    }

    // Result discarded; the handler cannot actually succeed.
    let _ = state
        .simulator
        .external_api("https://api.example.com/broken-endpoint")
        .await;

    let envelope = Envelope::error(
        "Internal server error occurred",
        json!({
            "error_code": "INTERNAL_ERROR",
            "timestamp": Utc::now().to_rfc3339(),
        }),
    );

    tracing::info!("Processed bad request with error response");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope))
}

/// `GET /admin` — unconditionally unauthorized.
pub async fn admin(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> (StatusCode, Json<Envelope>) {
    tracing::info!(client = %addr, "Admin access attempted");

    // Read and logged, never validated.
    let auth_token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    tracing::info!(token = %auth_token, "Checking authorization token");

    state
        .simulator
        .database("SELECT permissions FROM users WHERE token=?")
        .await;

    for check in [
        "validate_token_format",
        "check_token_expiry",
        "verify_admin_permissions",
    ] {
        state.simulator.auth_check(check).await;
    }

    tracing::warn!("Authorization failed, insufficient permissions");

    let envelope = Envelope::error(
        "Unauthorized access - admin privileges required",
        json!({
            "error_code": "UNAUTHORIZED",
            "required_role": "admin",
            "timestamp": Utc::now().to_rfc3339(),
        }),
    );

    (StatusCode::UNAUTHORIZED, Json(envelope))
}

/// `GET /health` — no simulated latency.
pub async fn health(State(state): State<AppState>) -> Json<Envelope> {
    let uptime = state.started_at.elapsed();

    Json(Envelope::healthy(
        "Service is running",
        json!({
            "uptime": uptime.as_secs_f64(),
            "timestamp": Utc::now().to_rfc3339(),
        }),
    ))
}
