//! Motorcycle record model and the DTO used to add records to the catalog.
//!
//! Field names serialize in camelCase (`maxPower`, `dryWeight`, ...) because
//! that is the shape existing catalog clients consume.

use serde::{Deserialize, Serialize, Serializer};
use validator::Validate;

use crate::types::DbId;

/// One motorcycle's full specification. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Motorcycle {
    pub id: DbId,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    /// Price in whole currency units.
    pub price: i64,
    /// Free-text label such as "Sport" or "Classic".
    pub category: String,

    pub engine_type: String,
    /// Engine displacement in cc.
    pub displacement: i32,
    /// Peak power in hp.
    #[serde(serialize_with = "whole_number")]
    pub max_power: f64,
    pub max_power_rpm: i32,
    /// Peak torque in Nm.
    #[serde(serialize_with = "whole_number")]
    pub max_torque: f64,
    pub max_torque_rpm: i32,

    /// Dimensions in mm.
    pub length: i32,
    pub width: i32,
    pub height: i32,
    pub wheelbase: i32,
    /// Dry weight in kg.
    pub dry_weight: i32,

    /// Top speed in km/h.
    pub top_speed: i32,

    /// Tank capacity in litres.
    #[serde(serialize_with = "whole_number")]
    pub fuel_capacity: f64,
    /// Consumption in L/100km.
    #[serde(serialize_with = "whole_number")]
    pub fuel_consumption: f64,

    pub riding_modes: i32,
    pub abs: bool,
    /// Number of traction control levels (0 = none).
    pub traction_control: i32,

    pub image_url: Option<String>,
    /// Free-form keywords, only used by text search.
    pub tags: Vec<String>,
}

/// Write integral values as JSON integers (`203`, not `203.0`).
fn whole_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl Motorcycle {
    /// Materialize a stored record from validated input and an assigned id.
    pub fn from_create(id: DbId, input: CreateMotorcycle) -> Self {
        Self {
            id,
            name: input.name,
            brand: input.brand,
            model: input.model,
            year: input.year,
            price: input.price,
            category: input.category,
            engine_type: input.engine_type,
            displacement: input.displacement,
            max_power: input.max_power,
            max_power_rpm: input.max_power_rpm,
            max_torque: input.max_torque,
            max_torque_rpm: input.max_torque_rpm,
            length: input.length,
            width: input.width,
            height: input.height,
            wheelbase: input.wheelbase,
            dry_weight: input.dry_weight,
            top_speed: input.top_speed,
            fuel_capacity: input.fuel_capacity,
            fuel_consumption: input.fuel_consumption,
            riding_modes: input.riding_modes,
            abs: input.abs,
            traction_control: input.traction_control,
            image_url: input.image_url,
            tags: input.tags,
        }
    }
}

fn default_abs() -> bool {
    true
}

/// DTO for adding a record to the catalog. The id is assigned by the store.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMotorcycle {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "brand must not be empty"))]
    pub brand: String,
    #[validate(length(min = 1, message = "model must not be empty"))]
    pub model: String,
    #[validate(range(min = 1885, max = 2100))]
    pub year: i32,
    #[validate(range(min = 0))]
    pub price: i64,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,

    #[validate(length(min = 1, message = "engineType must not be empty"))]
    pub engine_type: String,
    #[validate(range(min = 0))]
    pub displacement: i32,
    #[validate(range(min = 0.0))]
    pub max_power: f64,
    #[validate(range(min = 0))]
    pub max_power_rpm: i32,
    #[validate(range(min = 0.0))]
    pub max_torque: f64,
    #[validate(range(min = 0))]
    pub max_torque_rpm: i32,

    #[validate(range(min = 0))]
    pub length: i32,
    #[validate(range(min = 0))]
    pub width: i32,
    #[validate(range(min = 0))]
    pub height: i32,
    #[validate(range(min = 0))]
    pub wheelbase: i32,
    #[validate(range(min = 0))]
    pub dry_weight: i32,

    #[validate(range(min = 0))]
    pub top_speed: i32,

    #[validate(range(min = 0.0))]
    pub fuel_capacity: f64,
    #[validate(range(min = 0.0))]
    pub fuel_consumption: f64,

    #[validate(range(min = 0))]
    pub riding_modes: i32,
    #[serde(default = "default_abs")]
    pub abs: bool,
    #[validate(range(min = 0))]
    pub traction_control: i32,

    #[validate(url)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}
