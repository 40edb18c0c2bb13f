use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/readyz", get(handlers::readyz))
        .route("/livez", get(handlers::livez))
        .route("/metrics", get(handlers::metrics))
        .with_state(state)
}
