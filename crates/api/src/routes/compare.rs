use axum::routing::get;
use axum::Router;

use crate::handlers::compare;
use crate::state::AppState;

/// Comparison routes mounted at `/compare`.
///
/// ```text
/// GET    /{first_id}/{second_id}   -> compare_pair
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{first_id}/{second_id}", get(compare::compare_pair))
}
