//! Handlers for catalog facets (brands and categories).

use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/brands
pub async fn list_brands(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<String>>>> {
    let brands = state.store.list_brands()?;
    Ok(Json(DataResponse { data: brands }))
}

/// GET /api/v1/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<String>>>> {
    let categories = state.store.list_categories()?;
    Ok(Json(DataResponse { data: categories }))
}
