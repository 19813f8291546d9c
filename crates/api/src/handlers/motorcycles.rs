//! Handlers for the `/motorcycles` resource.

use axum::body::Bytes;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use motocompare_core::filters::parse_filters;
use motocompare_core::motorcycle::Motorcycle;
use motocompare_core::similarity::{clamp_similar_limit, SimilarMotorcycle};
use motocompare_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::query::{parse_id_list, SearchParams, SimilarParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/motorcycles
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Motorcycle>>>> {
    let motorcycles = state.store.get_all()?;
    Ok(Json(DataResponse { data: motorcycles }))
}

/// GET /api/v1/motorcycles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<DataResponse<Motorcycle>>> {
    let Path(id) = path?;
    let motorcycle = state.store.require(id)?;
    Ok(Json(DataResponse { data: motorcycle }))
}

/// GET /api/v1/motorcycles/search?query=
///
/// A missing or empty `query` is rejected. Whitespace is a valid query and
/// is matched literally.
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<Json<DataResponse<Vec<Motorcycle>>>> {
    let Query(params) = params?;
    let query = params
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::BadRequest("Search query is required".to_string()))?;

    let results = state.store.search(&query)?;
    tracing::debug!(query = %query, matches = results.len(), "Catalog search");
    Ok(Json(DataResponse { data: results }))
}

/// POST /api/v1/motorcycles/filter
///
/// The body is parsed leniently into [`SearchFilters`](motocompare_core::filters::SearchFilters)
/// so every invalid field can be reported at once. An empty body is the
/// empty filter set.
pub async fn filter(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<DataResponse<Vec<Motorcycle>>>> {
    let payload = if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            AppError::BadRequest(format!("Failed to parse the request body as JSON: {e}"))
        })?
    };
    let filters = parse_filters(payload)?;

    let results = state.store.filter(&filters)?;
    tracing::debug!(
        sort_by = ?filters.sort_key(),
        matches = results.len(),
        "Catalog filter"
    );
    Ok(Json(DataResponse { data: results }))
}

/// GET /api/v1/motorcycles/similar?ids=1,2&limit=3
///
/// `ids` is the current comparison selection in slot order; the first id
/// is the scoring reference.
pub async fn similar(
    State(state): State<AppState>,
    params: Result<Query<SimilarParams>, QueryRejection>,
) -> AppResult<Json<DataResponse<Vec<SimilarMotorcycle>>>> {
    let Query(params) = params?;
    let ids = parse_id_list(params.ids.as_deref().unwrap_or_default())?;
    let limit = clamp_similar_limit(params.limit, state.config.similar_limit);

    let suggestions = state.store.similar(&ids, limit)?;
    tracing::debug!(?ids, limit, count = suggestions.len(), "Similar suggestions");
    Ok(Json(DataResponse { data: suggestions }))
}
