//! Route definitions for the `/motorcycles` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::motorcycles;
use crate::state::AppState;

/// Motorcycle routes mounted at `/motorcycles`.
///
/// Static segments take priority over `/{id}`.
///
/// ```text
/// GET    /                  -> list
/// GET    /search            -> search
/// POST   /filter            -> filter
/// GET    /similar           -> similar
/// GET    /{id}              -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(motorcycles::list))
        .route("/search", get(motorcycles::search))
        .route("/filter", post(motorcycles::filter))
        .route("/similar", get(motorcycles::similar))
        .route("/{id}", get(motorcycles::get_by_id))
}
