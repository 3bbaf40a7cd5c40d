//! Standard-mode validators: intervals, repeating blocks, tagged sequences.

use serde_json::Value;

use super::leaf::{validate_alternating, validate_power_zone, validate_range};
use super::{CADENCE_BOUNDS, field_path, index_path, is_cadence, is_positive_integer, require_fields};
use crate::error::Diagnostic;
use crate::parse::{SequenceItemKind, display_value, variant};

/// One workout segment at `path`.
///
/// Presence conflicts between `powerZone` and `powerZoneRange` are reported
/// first; each present value is then validated as well, so an interval with
/// both fields and a bad zone gets both diagnostics. `alternating` is checked
/// on its own and may sit next to either zone field.
pub fn validate_interval(interval: &Value, path: &str) -> Vec<Diagnostic> {
    let mut errors = Vec::new();
    let Some(fields) = interval.as_object() else {
        errors.push(Diagnostic::new(path, "Interval must be an object"));
        return errors;
    };

    require_fields(fields, &["id", "name", "duration"], path, &mut errors);

    let zone = fields.get("powerZone");
    let range = fields.get("powerZoneRange");
    match (zone, range) {
        (None, None) => errors.push(Diagnostic::new(
            path,
            "Must have either 'powerZone' or 'powerZoneRange'",
        )),
        (Some(_), Some(_)) => errors.push(Diagnostic::new(
            path,
            "Cannot have both 'powerZone' and 'powerZoneRange'",
        )),
        _ => {}
    }
    if let Some(zone) = zone {
        errors.extend(validate_power_zone(zone, &field_path(path, "powerZone")).err());
    }
    if let Some(range) = range {
        errors.extend(validate_range(range, &field_path(path, "powerZoneRange")));
    }

    if let Some(alternating) = fields.get("alternating") {
        errors.extend(validate_alternating(alternating, &field_path(path, "alternating")));
    }

    if let Some(duration) = fields.get("duration") {
        if !is_positive_integer(duration) {
            errors.push(Diagnostic::new(path, "duration must be a positive integer"));
        }
    }

    if let Some(cadence) = fields.get("cadence") {
        if !is_cadence(cadence) {
            errors.push(Diagnostic::new(path, format!("cadence {CADENCE_BOUNDS}")));
        }
    }

    if let Some(notes) = fields.get("notes") {
        if !notes.is_string() {
            errors.push(Diagnostic::new(path, "notes must be a string"));
        }
    }

    errors
}

/// A group of intervals repeated `repetitions` times.
pub fn validate_block(block: &Value, path: &str) -> Vec<Diagnostic> {
    let mut errors = Vec::new();
    let Some(fields) = block.as_object() else {
        errors.push(Diagnostic::new(path, "Block must be an object"));
        return errors;
    };

    require_fields(
        fields,
        &["id", "name", "repetitions", "intervals"],
        path,
        &mut errors,
    );

    if let Some(repetitions) = fields.get("repetitions") {
        if !is_positive_integer(repetitions) {
            errors.push(Diagnostic::new(path, "repetitions must be a positive integer"));
        }
    }

    match fields.get("intervals") {
        None => {}
        Some(Value::Array(intervals)) if intervals.is_empty() => {
            errors.push(Diagnostic::new(path, "intervals array cannot be empty"));
        }
        Some(Value::Array(intervals)) => {
            for (idx, interval) in intervals.iter().enumerate() {
                errors.extend(validate_interval(
                    interval,
                    &index_path(path, "intervals", idx),
                ));
            }
        }
        Some(_) => errors.push(Diagnostic::new(path, "intervals must be an array")),
    }

    errors
}

/// Every item of a workout's top-level `sequence`.
pub fn validate_sequence(items: &[Value]) -> Vec<Diagnostic> {
    items
        .iter()
        .enumerate()
        .flat_map(|(idx, item)| validate_sequence_item(item, idx))
        .collect()
}

/// `sequence[index]`: an interval or block tagged by `type`. The payload
/// fields sit beside the tag, so the item itself is validated in place.
pub fn validate_sequence_item(item: &Value, index: usize) -> Vec<Diagnostic> {
    let path = index_path("", "sequence", index);
    let Some(fields) = item.as_object() else {
        return vec![Diagnostic::new(path, "Sequence item must be an object")];
    };

    let Some(kind) = fields.get("type") else {
        return vec![Diagnostic::new(path, "Missing 'type' field")];
    };

    match variant::<SequenceItemKind>(kind) {
        Some(SequenceItemKind::Interval) => validate_interval(item, &path),
        Some(SequenceItemKind::Block) => validate_block(item, &path),
        None => vec![Diagnostic::new(
            path,
            format!(
                "type must be 'interval' or 'block', got '{}'",
                display_value(kind)
            ),
        )],
    }
}
