//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub gateway: String,
}

/// Root endpoint
pub async fn root() -> &'static str {
    "KrishiMitra Crop Advisory API v1.0"
}

/// Liveness probe
pub async fn health_check() -> &'static str {
    "OK"
}

/// Detailed health endpoint handler
pub async fn api_health(State(state): State<AppState>) -> Json<HealthResponse> {
    let gateway_status = match state.config.gateway.api_key.as_deref() {
        Some(key) if !key.is_empty() => "configured",
        _ => "missing_credentials",
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        gateway: gateway_status.to_string(),
    })
}
