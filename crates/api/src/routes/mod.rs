pub mod catalog;
pub mod compare;
pub mod health;
pub mod motorcycles;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /motorcycles                                     list (GET)
/// /motorcycles/{id}                                get by id (GET)
/// /motorcycles/search?query=                       text search (GET)
/// /motorcycles/filter                              filter + sort (POST)
/// /motorcycles/similar?ids=&limit=                 similar suggestions (GET)
///
/// /compare/{first_id}/{second_id}                  comparison table + suggestions (GET)
///
/// /brands                                          distinct brands (GET)
/// /categories                                      distinct categories (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/motorcycles", motorcycles::router())
        .nest("/compare", compare::router())
        .merge(catalog::router())
}
