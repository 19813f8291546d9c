//! Search filter payload and its parsing rules.
//!
//! Every field is optional. A field that is absent disables its predicate
//! entirely; empty `brands` / `categories` lists also disable theirs. An
//! explicit `null` is a type error, not an absent field.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, FieldError};

/// Result ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Catalog insertion order.
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    /// Largest displacement first.
    EngineSize,
    /// Highest peak power first.
    Power,
}

/// Valid `sortBy` values, in wire form.
pub const VALID_SORT_KEYS: &[&str] = &["relevance", "price_asc", "price_desc", "engine_size", "power"];

/// Conjunctive filter set plus a sort key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default, deserialize_with = "present")]
    pub query: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub brands: Option<Vec<String>>,
    #[serde(default, deserialize_with = "present")]
    pub categories: Option<Vec<String>>,
    #[serde(default, deserialize_with = "present")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "present")]
    pub max_price: Option<f64>,
    #[serde(default, deserialize_with = "present")]
    pub min_engine: Option<f64>,
    #[serde(default, deserialize_with = "present")]
    pub max_engine: Option<f64>,
    #[serde(default, deserialize_with = "present")]
    pub sort_by: Option<SortBy>,
}

/// Deserialize a key that is in the payload. Missing keys fall back to
/// `#[serde(default)]`; a `null` value is rejected.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)?
        .map(Some)
        .ok_or_else(|| de::Error::custom("must not be null"))
}

impl SearchFilters {
    /// The text query, if one is set and non-empty.
    pub fn text_query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }

    /// Brand list, if it would actually restrict results.
    pub fn brand_set(&self) -> Option<&[String]> {
        self.brands.as_deref().filter(|b| !b.is_empty())
    }

    /// Category list, if it would actually restrict results.
    pub fn category_set(&self) -> Option<&[String]> {
        self.categories.as_deref().filter(|c| !c.is_empty())
    }

    pub fn sort_key(&self) -> SortBy {
        self.sort_by.unwrap_or_default()
    }
}

/// Build [`SearchFilters`] from an untyped JSON payload.
///
/// Unknown keys are ignored. On failure every offending key is reported,
/// not just the first one serde trips over.
pub fn parse_filters(payload: serde_json::Value) -> Result<SearchFilters, CoreError> {
    let serde_json::Value::Object(fields) = payload else {
        return Err(CoreError::InvalidFields(vec![FieldError::new(
            "body",
            "expected a JSON object",
        )]));
    };

    match serde_json::from_value::<SearchFilters>(serde_json::Value::Object(fields.clone())) {
        Ok(filters) => Ok(filters),
        Err(whole) => {
            // All fields are optional, so a single-key object parses iff
            // that key's value is acceptable.
            let mut errors: Vec<FieldError> = fields
                .into_iter()
                .filter_map(|(key, value)| {
                    let mut probe = serde_json::Map::new();
                    probe.insert(key.clone(), value);
                    serde_json::from_value::<SearchFilters>(serde_json::Value::Object(probe))
                        .err()
                        .map(|e| field_error(key, e))
                })
                .collect();

            if errors.is_empty() {
                errors.push(FieldError::new("body", whole.to_string()));
            }
            Err(CoreError::InvalidFields(errors))
        }
    }
}

fn field_error(key: String, err: serde_json::Error) -> FieldError {
    if key == "sortBy" {
        let message = format!("{err}; expected one of: {}", VALID_SORT_KEYS.join(", "));
        return FieldError::new(key, message);
    }
    FieldError::new(key, err.to_string())
}
