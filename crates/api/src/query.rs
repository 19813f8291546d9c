//! Query-string parameter types shared by the catalog handlers.

use motocompare_core::types::DbId;
use serde::Deserialize;

use crate::error::AppError;

/// `?query=` for text search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// `?ids=1,2&limit=3` for similar suggestions.
#[derive(Debug, Deserialize)]
pub struct SimilarParams {
    /// Comma-separated ids of the current selection, slot 1 first.
    pub ids: Option<String>,
    pub limit: Option<usize>,
}

/// Parse a comma-separated id list. Blank input yields an empty list.
pub fn parse_id_list(raw: &str) -> Result<Vec<DbId>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<DbId>()
                .map_err(|_| AppError::BadRequest(format!("Invalid motorcycle id '{s}'")))
        })
        .collect()
}
