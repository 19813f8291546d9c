//! Weighted similarity scoring and "similar motorcycle" suggestions.
//!
//! The match score is a 0-100 percentage built from four weighted terms:
//! category equality, displacement, peak power and price. Each numeric term
//! decays linearly to zero at its tolerance.

use serde::Serialize;

use crate::motorcycle::Motorcycle;

// ---------------------------------------------------------------------------
// Weights and tolerances
// ---------------------------------------------------------------------------

pub const WEIGHT_CATEGORY: f64 = 40.0;
pub const WEIGHT_DISPLACEMENT: f64 = 30.0;
pub const WEIGHT_POWER: f64 = 20.0;
pub const WEIGHT_PRICE: f64 = 10.0;

/// Displacement difference (cc) at which the displacement term reaches zero.
pub const DISPLACEMENT_TOLERANCE: f64 = 500.0;
/// Power difference (hp) at which the power term reaches zero.
pub const POWER_TOLERANCE: f64 = 100.0;
/// Price difference at which the price term reaches zero.
pub const PRICE_TOLERANCE: f64 = 20_000.0;

/// Default number of suggestions returned by [`similar`].
pub const DEFAULT_SIMILAR_LIMIT: usize = 3;
/// Upper bound accepted for a caller-supplied suggestion count.
pub const MAX_SIMILAR_LIMIT: usize = 20;

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

fn closeness(a: f64, b: f64, tolerance: f64) -> f64 {
    (1.0 - (a - b).abs() / tolerance).max(0.0)
}

/// Unrounded weighted score of `candidate` against `reference`.
pub fn raw_score(reference: &Motorcycle, candidate: &Motorcycle) -> f64 {
    let category = if candidate.category == reference.category {
        WEIGHT_CATEGORY
    } else {
        0.0
    };

    let displacement = WEIGHT_DISPLACEMENT
        * closeness(
            f64::from(candidate.displacement),
            f64::from(reference.displacement),
            DISPLACEMENT_TOLERANCE,
        );
    let power = WEIGHT_POWER * closeness(candidate.max_power, reference.max_power, POWER_TOLERANCE);
    let price = WEIGHT_PRICE
        * closeness(candidate.price as f64, reference.price as f64, PRICE_TOLERANCE);

    category + displacement + power + price
}

/// Match percentage of `candidate` against `reference`, rounded half-up.
///
/// Always in `0..=100`; a record scored against itself yields 100.
pub fn match_score(reference: &Motorcycle, candidate: &Motorcycle) -> u8 {
    // Terms are non-negative, so floor(x + 0.5) is round-half-up.
    (raw_score(reference, candidate) + 0.5).floor().clamp(0.0, 100.0) as u8
}

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

/// A suggested record with its match percentage against the reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarMotorcycle {
    #[serde(flatten)]
    pub motorcycle: Motorcycle,
    pub match_percentage: u8,
}

/// Rank catalog records similar to the current selection.
///
/// Candidates exclude the selected records and must share a category with at
/// least one of them. Scores are computed against `selected[0]`. Ties keep
/// catalog order. An empty selection yields no suggestions.
pub fn similar(
    catalog: &[Motorcycle],
    selected: &[Motorcycle],
    limit: usize,
) -> Vec<SimilarMotorcycle> {
    let Some(reference) = selected.first() else {
        return Vec::new();
    };

    let mut ranked: Vec<SimilarMotorcycle> = catalog
        .iter()
        .filter(|m| !selected.iter().any(|s| s.id == m.id))
        .filter(|m| selected.iter().any(|s| s.category == m.category))
        .map(|m| SimilarMotorcycle {
            match_percentage: match_score(reference, m),
            motorcycle: m.clone(),
        })
        .collect();

    ranked.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    ranked.truncate(limit);
    ranked
}

/// Clamp a user-provided suggestion count to `1..=MAX_SIMILAR_LIMIT`.
pub fn clamp_similar_limit(limit: Option<usize>, default: usize) -> usize {
    limit.unwrap_or(default).clamp(1, MAX_SIMILAR_LIMIT)
}
