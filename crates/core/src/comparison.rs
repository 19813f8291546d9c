//! Side-by-side comparison: the two-slot selection state machine and the
//! field-by-field specification table.

use serde::Serialize;

use crate::motorcycle::Motorcycle;

// ---------------------------------------------------------------------------
// Selection state machine
// ---------------------------------------------------------------------------

/// One of the two comparison positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    First,
    Second,
}

/// Records chosen for comparison.
///
/// Adding when both slots are filled replaces the *first* slot and leaves the
/// second untouched. Removing a slot never shifts the other one over.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection<T> {
    #[default]
    Empty,
    First(T),
    Second(T),
    Both(T, T),
}

impl<T> Selection<T> {
    /// Transition on "add candidate".
    pub fn add(self, item: T) -> Self {
        match self {
            Selection::Empty => Selection::First(item),
            Selection::First(first) => Selection::Both(first, item),
            Selection::Both(_, second) => Selection::Both(item, second),
            // Slot 1 empty: the pair restarts from the new item.
            Selection::Second(_) => Selection::First(item),
        }
    }

    /// Transition on "remove slot".
    pub fn remove(self, slot: Slot) -> Self {
        match (self, slot) {
            (Selection::First(_), Slot::First) => Selection::Empty,
            (Selection::Second(_), Slot::Second) => Selection::Empty,
            (Selection::Both(_, second), Slot::First) => Selection::Second(second),
            (Selection::Both(first, _), Slot::Second) => Selection::First(first),
            (unchanged, _) => unchanged,
        }
    }

    pub fn get(&self, slot: Slot) -> Option<&T> {
        match (self, slot) {
            (Selection::First(a), Slot::First) | (Selection::Both(a, _), Slot::First) => Some(a),
            (Selection::Second(b), Slot::Second) | (Selection::Both(_, b), Slot::Second) => Some(b),
            _ => None,
        }
    }

    /// Filled slots in slot order (slot 1 first).
    pub fn items(&self) -> Vec<&T> {
        [self.get(Slot::First), self.get(Slot::Second)]
            .into_iter()
            .flatten()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }

    /// `true` once both slots hold a record and a table can be rendered.
    pub fn is_complete(&self) -> bool {
        matches!(self, Selection::Both(_, _))
    }
}

// ---------------------------------------------------------------------------
// Specification table
// ---------------------------------------------------------------------------

pub const SECTION_OVERVIEW: &str = "Overview";
pub const SECTION_ENGINE: &str = "Engine & Performance";
pub const SECTION_DIMENSIONS: &str = "Dimensions & Weight";
pub const SECTION_FUEL: &str = "Fuel System & Economy";
pub const SECTION_ELECTRONICS: &str = "Electronics & Features";

/// Which side of a row has the better value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    First,
    Second,
    Equal,
}

/// One line of the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecRow {
    pub section: &'static str,
    pub label: &'static str,
    pub first: String,
    pub second: String,
    pub winner: Winner,
}

/// Full comparison of two records.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonTable {
    pub first: Motorcycle,
    pub second: Motorcycle,
    pub rows: Vec<SpecRow>,
}

fn better(a: f64, b: f64, higher_is_better: bool) -> Winner {
    if a == b {
        Winner::Equal
    } else if (a > b) == higher_is_better {
        Winner::First
    } else {
        Winner::Second
    }
}

fn numeric_row(
    section: &'static str,
    label: &'static str,
    a: f64,
    b: f64,
    unit: &str,
    higher_is_better: bool,
) -> SpecRow {
    SpecRow {
        section,
        label,
        first: format!("{a}{unit}"),
        second: format!("{b}{unit}"),
        winner: better(a, b, higher_is_better),
    }
}

fn text_row(section: &'static str, label: &'static str, first: String, second: String) -> SpecRow {
    SpecRow {
        section,
        label,
        first,
        second,
        winner: Winner::Equal,
    }
}

/// Format an integer with `,` thousands separators (`13500` -> `13,500`).
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn power_text(m: &Motorcycle) -> String {
    format!(
        "{} hp @ {} rpm",
        m.max_power,
        group_thousands(m.max_power_rpm.into())
    )
}

fn torque_text(m: &Motorcycle) -> String {
    format!(
        "{} Nm @ {} rpm",
        m.max_torque,
        group_thousands(m.max_torque_rpm.into())
    )
}

fn dimensions_text(m: &Motorcycle) -> String {
    format!("{} x {} x {} mm", m.length, m.width, m.height)
}

fn abs_text(m: &Motorcycle) -> String {
    let text = if m.abs { "Standard" } else { "Not available" };
    text.to_string()
}

/// Build the field-by-field table for `a` (slot 1) against `b` (slot 2).
///
/// Numeric rows mark the better side (lower is better for price, dry weight
/// and fuel consumption). Composite text rows are never ranked.
pub fn compare(a: &Motorcycle, b: &Motorcycle) -> Vec<SpecRow> {
    vec![
        SpecRow {
            section: SECTION_OVERVIEW,
            label: "Price",
            first: format!("${}", group_thousands(a.price)),
            second: format!("${}", group_thousands(b.price)),
            winner: better(a.price as f64, b.price as f64, false),
        },
        numeric_row(SECTION_OVERVIEW, "Top Speed", a.top_speed.into(), b.top_speed.into(), " km/h", true),
        text_row(SECTION_ENGINE, "Engine Type", a.engine_type.clone(), b.engine_type.clone()),
        numeric_row(SECTION_ENGINE, "Displacement", a.displacement.into(), b.displacement.into(), "cc", true),
        text_row(SECTION_ENGINE, "Max Power", power_text(a), power_text(b)),
        text_row(SECTION_ENGINE, "Max Torque", torque_text(a), torque_text(b)),
        text_row(
            SECTION_DIMENSIONS,
            "Length x Width x Height",
            dimensions_text(a),
            dimensions_text(b),
        ),
        numeric_row(SECTION_DIMENSIONS, "Wheelbase", a.wheelbase.into(), b.wheelbase.into(), " mm", true),
        numeric_row(SECTION_DIMENSIONS, "Dry Weight", a.dry_weight.into(), b.dry_weight.into(), " kg", false),
        numeric_row(SECTION_FUEL, "Fuel Tank Capacity", a.fuel_capacity, b.fuel_capacity, " L", true),
        numeric_row(
            SECTION_FUEL,
            "Fuel Consumption",
            a.fuel_consumption,
            b.fuel_consumption,
            " L/100km",
            false,
        ),
        numeric_row(SECTION_ELECTRONICS, "Riding Modes", a.riding_modes.into(), b.riding_modes.into(), " Modes", true),
        text_row(SECTION_ELECTRONICS, "ABS", abs_text(a), abs_text(b)),
        text_row(
            SECTION_ELECTRONICS,
            "Traction Control",
            format!("{}-Level", a.traction_control),
            format!("{}-Level", b.traction_control),
        ),
    ]
}
