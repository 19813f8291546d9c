//! Handler for the side-by-side comparison view.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use motocompare_core::comparison::{compare, ComparisonTable, Selection};
use motocompare_core::similarity::SimilarMotorcycle;
use motocompare_core::types::DbId;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Comparison table plus suggestions for the pair.
#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    pub table: ComparisonTable,
    pub similar: Vec<SimilarMotorcycle>,
}

/// GET /api/v1/compare/{first_id}/{second_id}
///
/// Fills both selection slots in order and scores suggestions against the
/// first slot.
pub async fn compare_pair(
    State(state): State<AppState>,
    path: Result<Path<(DbId, DbId)>, PathRejection>,
) -> AppResult<Json<DataResponse<ComparisonResponse>>> {
    let Path((first_id, second_id)) = path?;
    let first = state.store.require(first_id)?;
    let second = state.store.require(second_id)?;

    let selection = Selection::Empty.add(&first).add(&second);
    let selected_ids: Vec<DbId> = selection.items().iter().map(|m| m.id).collect();
    let similar = state
        .store
        .similar(&selected_ids, state.config.similar_limit)?;

    tracing::debug!(first_id, second_id, suggestions = similar.len(), "Comparison");
    let rows = compare(&first, &second);
    Ok(Json(DataResponse {
        data: ComparisonResponse {
            table: ComparisonTable { first, second, rows },
            similar,
        },
    }))
}
