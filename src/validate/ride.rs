//! Flat ride-tracking records (one completed ride, no nesting), plus the
//! per-field cast used when rides are imported from tabular text.

use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::error::{Diagnostic, ValidationReport};
use crate::parse::{RideType, display_value, quoted_list, type_name, variant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Integer,
}

impl FieldKind {
    fn noun(self) -> &'static str {
        match self {
            FieldKind::String => "a string",
            FieldKind::Number => "a number",
            FieldKind::Integer => "an integer",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Number => value.is_number(),
            FieldKind::Integer => value.is_i64() || value.is_u64(),
        }
    }
}

pub const REQUIRED_FIELDS: [&str; 4] = ["id", "date", "duration", "distance"];

/// Every known ride field, in report order.
pub const RIDE_FIELDS: [(&str, FieldKind); 16] = [
    ("id", FieldKind::String),
    ("date", FieldKind::String),
    ("duration", FieldKind::Number),
    ("distance", FieldKind::Number),
    ("avgSpeed", FieldKind::Number),
    ("maxSpeed", FieldKind::Number),
    ("avgHeartRate", FieldKind::Integer),
    ("maxHeartRate", FieldKind::Integer),
    ("avgCadence", FieldKind::Integer),
    ("maxCadence", FieldKind::Integer),
    ("avgPower", FieldKind::Integer),
    ("maxPower", FieldKind::Integer),
    ("calories", FieldKind::Integer),
    ("elevationGain", FieldKind::Number),
    ("workoutType", FieldKind::String),
    ("notes", FieldKind::String),
];

pub fn field_kind(name: &str) -> Option<FieldKind> {
    RIDE_FIELDS
        .iter()
        .find(|(field, _)| *field == name)
        .map(|(_, kind)| *kind)
}

/// Validate one ride record. Unknown fields are ignored.
pub fn validate_ride(ride: &Value) -> Vec<Diagnostic> {
    let Some(fields) = ride.as_object() else {
        return vec![Diagnostic::root(format!(
            "Ride must be an object, got {}",
            type_name(ride)
        ))];
    };

    let mut errors = Vec::new();
    check_required(fields, &mut errors);
    check_types(fields, &mut errors);
    check_values(fields, &mut errors);
    errors
}

/// A decoded ride file: one record or an array of records. Errors are
/// labelled `Workout <n>: ` when the array holds more than one.
pub fn validate_ride_document(document: &Value) -> ValidationReport {
    let errors: Vec<Diagnostic> = match document {
        Value::Array(rides) => {
            let label = rides.len() > 1;
            rides
                .iter()
                .enumerate()
                .flat_map(|(idx, ride)| {
                    validate_ride(ride).into_iter().map(move |e| {
                        if label {
                            e.in_document(idx + 1)
                        } else {
                            e
                        }
                    })
                })
                .collect()
        }
        ride => validate_ride(ride),
    };
    debug!(errors = errors.len(), "validated ride document");
    ValidationReport::from_errors(errors)
}

fn check_required(fields: &Map<String, Value>, errors: &mut Vec<Diagnostic>) {
    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|f| !fields.contains_key(*f))
        .collect();
    if !missing.is_empty() {
        errors.push(Diagnostic::root(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }
}

fn check_types(fields: &Map<String, Value>, errors: &mut Vec<Diagnostic>) {
    for (name, kind) in RIDE_FIELDS {
        let Some(value) = fields.get(name) else {
            continue;
        };
        if !kind.accepts(value) {
            errors.push(Diagnostic::root(format!(
                "Field '{name}' should be {}, got {}",
                kind.noun(),
                type_name(value)
            )));
        }
    }
}

fn check_values(fields: &Map<String, Value>, errors: &mut Vec<Diagnostic>) {
    for (name, kind) in RIDE_FIELDS {
        if kind == FieldKind::String {
            continue;
        }
        let Some(Value::Number(n)) = fields.get(name) else {
            continue;
        };
        if n.as_f64().is_some_and(|v| v < 0.0) {
            errors.push(Diagnostic::root(format!(
                "Field '{name}' should be >= 0, got {n}"
            )));
        }
    }

    if let Some(ride_type) = fields.get("workoutType") {
        if variant::<RideType>(ride_type).is_none() {
            errors.push(Diagnostic::root(format!(
                "Field 'workoutType' should be one of {}, got '{}'",
                quoted_list(&RideType::NAMES),
                display_value(ride_type)
            )));
        }
    }
}

// =============================================================================
// Field coercion
// =============================================================================

/// Cast one raw text cell to the JSON type of its field.
///
/// Blank cells and unparseable numerics yield `None`, meaning the field is
/// left out of the record. Integer fields accept decimal text and truncate it.
/// Unknown fields stay strings.
pub fn coerce_field(name: &str, raw: &str) -> Option<Value> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match field_kind(name).unwrap_or(FieldKind::String) {
        FieldKind::String => Some(Value::String(raw.to_string())),
        FieldKind::Number => {
            let n = raw.parse::<f64>().ok()?;
            Number::from_f64(n).map(Value::Number)
        }
        FieldKind::Integer => {
            let n = raw.parse::<f64>().ok()?;
            if !n.is_finite() || n.trunc() < i64::MIN as f64 || n.trunc() > i64::MAX as f64 {
                return None;
            }
            Some(Value::from(n.trunc() as i64))
        }
    }
}

/// Build a ride record from `(field, raw text)` cells, dropping blank ones.
pub fn coerce_record<'a>(cells: impl IntoIterator<Item = (&'a str, &'a str)>) -> Map<String, Value> {
    cells
        .into_iter()
        .filter_map(|(name, raw)| coerce_field(name, raw).map(|value| (name.to_string(), value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_cells_truncate_decimal_text() {
        assert_eq!(coerce_field("avgPower", " 212.7 "), Some(json!(212)));
        assert_eq!(coerce_field("calories", "-3.9"), Some(json!(-3)));
    }

    #[test]
    fn number_cells_stay_floats() {
        assert_eq!(coerce_field("distance", "42"), Some(json!(42.0)));
        assert_eq!(coerce_field("distance", "1e3"), Some(json!(1000.0)));
    }

    #[test]
    fn blank_and_garbage_cells_are_dropped() {
        assert_eq!(coerce_field("notes", "   "), None);
        assert_eq!(coerce_field("avgPower", "lots"), None);
        assert_eq!(coerce_field("duration", "NaN"), None);
        assert_eq!(coerce_field("avgPower", "inf"), None);
    }

    #[test]
    fn unknown_fields_are_strings() {
        assert_eq!(coerce_field("bike", " Tarmac "), Some(json!("Tarmac")));
        assert_eq!(coerce_field("id", "0042"), Some(json!("0042")));
    }

    #[test]
    fn record_keeps_only_present_cells() {
        let record = coerce_record([
            ("id", "ride-7"),
            ("date", "2024-03-02"),
            ("duration", "3600"),
            ("distance", "31.5"),
            ("avgHeartRate", ""),
            ("avgCadence", "88"),
        ]);
        assert_eq!(
            Value::Object(record),
            json!({
                "id": "ride-7",
                "date": "2024-03-02",
                "duration": 3600.0,
                "distance": 31.5,
                "avgCadence": 88
            })
        );
    }

    #[test]
    fn coerced_record_validates() {
        let record = coerce_record([
            ("id", "ride-7"),
            ("date", "2024-03-02"),
            ("duration", "3600"),
            ("distance", "31.5"),
            ("workoutType", "tempo"),
        ]);
        assert!(validate_ride(&Value::Object(record)).is_empty());
    }
}
