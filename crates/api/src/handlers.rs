use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tracing::debug;

use crate::state::AppState;

#[derive(Serialize)]
pub struct Status {
    pub status: String,
    pub timestamp: String,
    pub uptime: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub checks: BTreeMap<String, String>,
}

fn status_body(state: &AppState, status: &str, checks: BTreeMap<String, String>) -> Status {
    Status {
        status: status.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime: format!("{:?}", state.health.uptime()),
        checks,
    }
}

pub async fn healthz(State(state): State<AppState>) -> impl IntoResponse {
    let checks = state.health.run_checks();
    let all_ok = state.health.is_healthy() && checks.values().all(|status| status == "ok");

    debug!(healthy = all_ok, "health probe");

    if all_ok {
        (StatusCode::OK, Json(status_body(&state, "healthy", checks)))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(status_body(&state, "unhealthy", checks)),
        )
    }
}

pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    if state.health.is_ready() {
        (
            StatusCode::OK,
            Json(status_body(&state, "ready", BTreeMap::new())),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(status_body(&state, "not ready", BTreeMap::new())),
        )
    }
}

pub async fn livez(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(status_body(&state, "alive", BTreeMap::new())),
    )
}

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render_prometheus(),
    )
}
