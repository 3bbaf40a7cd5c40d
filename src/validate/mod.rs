//! Schema validation phase.
//!
//! Every validator takes a tree node plus the structural path it lives at and
//! returns all diagnostics found beneath it. Nothing short-circuits across
//! siblings: a broken interval never hides errors in the next one.

pub mod leaf;
pub mod ride;
pub mod roulette;
pub mod standard;
pub mod workout;

pub use leaf::{validate_alternating, validate_power_zone, validate_range};
pub use ride::{validate_ride, validate_ride_document};
pub use roulette::{validate_melodic_roulette, validate_roulette_slot, validate_work_block_definition};
pub use standard::{validate_block, validate_interval, validate_sequence, validate_sequence_item};
pub use workout::{validate_workout, validate_workout_document};

use std::ops::RangeInclusive;

use serde_json::{Map, Value};

use crate::error::Diagnostic;
use crate::parse::{Theme, display_value, quoted_list, variant};

pub(crate) const CADENCE_RPM: RangeInclusive<i64> = 40..=150;
pub(crate) const CADENCE_BOUNDS: &str = "must be an integer between 40 and 150";

/// `parent.field`, or just `field` at the document root.
pub(crate) fn field_path(path: &str, field: &str) -> String {
    if path.is_empty() {
        field.to_string()
    } else {
        format!("{path}.{field}")
    }
}

/// `parent.field[index]`
pub(crate) fn index_path(path: &str, field: &str, index: usize) -> String {
    format!("{}[{index}]", field_path(path, field))
}

pub(crate) fn is_positive_integer(value: &Value) -> bool {
    value.as_u64().is_some_and(|n| n >= 1)
}

pub(crate) fn is_cadence(value: &Value) -> bool {
    value.as_i64().is_some_and(|rpm| CADENCE_RPM.contains(&rpm))
}

pub(crate) fn is_non_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.is_empty())
}

/// Push `Missing required field '<f>'` at `path` for each absent field.
pub(crate) fn require_fields(
    fields: &Map<String, Value>,
    required: &[&str],
    path: &str,
    errors: &mut Vec<Diagnostic>,
) {
    for field in required {
        if !fields.contains_key(*field) {
            errors.push(Diagnostic::new(
                path,
                format!("Missing required field '{field}'"),
            ));
        }
    }
}

/// Workout-level `theme`, shared by both modes.
pub(crate) fn check_theme(fields: &Map<String, Value>, errors: &mut Vec<Diagnostic>) {
    let Some(theme) = fields.get("theme") else {
        return;
    };
    if variant::<Theme>(theme).is_none() {
        errors.push(Diagnostic::root(format!(
            "theme must be one of {}, got '{}'",
            quoted_list(&Theme::NAMES),
            display_value(theme)
        )));
    }
}
