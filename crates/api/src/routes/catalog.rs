use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Facet routes merged directly into `/api/v1`.
///
/// ```text
/// GET    /brands            -> list_brands
/// GET    /categories        -> list_categories
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/brands", get(catalog::list_brands))
        .route("/categories", get(catalog::list_categories))
}
