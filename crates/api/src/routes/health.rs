use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of records in the catalog, `None` if the store is unreadable.
    pub catalog_size: Option<usize>,
}

/// GET /health -- returns service and catalog health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let catalog_size = state.store.len().ok();

    let status = if catalog_size.is_some() { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        catalog_size,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
