//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Backing table probe (200 when the table is active)

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Does NOT touch the backing store.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Backing table probe.
///
/// Returns 200 if the table reports itself active, 503 otherwise.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let healthy = state.advert_repo.check_health().await;
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(json!({ "healthy": healthy })))
}
