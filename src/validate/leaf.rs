//! Leaf validators: single power zone, zone range, alternating pattern.

use serde_json::Value;

use super::{CADENCE_BOUNDS, field_path, is_cadence};
use crate::error::Diagnostic;
use crate::parse::PowerZone;

/// A single power zone token at `path`, decoded once.
pub fn validate_power_zone(value: &Value, path: &str) -> Result<PowerZone, Diagnostic> {
    PowerZone::from_value(value).map_err(|e| Diagnostic::new(path, e.to_string()))
}

/// `{start, end}` range at `path`. Both ends are required; their order is not
/// checked, so `{start: 5, end: 2}` is accepted.
pub fn validate_range(value: &Value, path: &str) -> Vec<Diagnostic> {
    let mut errors = Vec::new();
    let Some(range) = value.as_object() else {
        errors.push(Diagnostic::new(path, "must be an object"));
        return errors;
    };

    for end in ["start", "end"] {
        match range.get(end) {
            Some(zone) => errors.extend(validate_power_zone(zone, &field_path(path, end)).err()),
            None => errors.push(Diagnostic::new(path, format!("missing '{end}'"))),
        }
    }

    errors
}

/// A/B alternating pattern at `path`: two required zones, two optional cadences.
pub fn validate_alternating(value: &Value, path: &str) -> Vec<Diagnostic> {
    let mut errors = Vec::new();
    let Some(alternating) = value.as_object() else {
        errors.push(Diagnostic::new(path, "must be an object"));
        return errors;
    };

    for side in ["powerZoneA", "powerZoneB"] {
        match alternating.get(side) {
            Some(zone) => errors.extend(validate_power_zone(zone, &field_path(path, side)).err()),
            None => errors.push(Diagnostic::new(path, format!("missing '{side}'"))),
        }
    }

    for side in ["cadenceA", "cadenceB"] {
        if let Some(cadence) = alternating.get(side) {
            if !is_cadence(cadence) {
                errors.push(Diagnostic::new(field_path(path, side), CADENCE_BOUNDS));
            }
        }
    }

    errors
}
