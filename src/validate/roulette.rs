//! Melodic-roulette validators.
//!
//! A roulette workout has no fixed sequence. Playlist-tagged slots are filled
//! at ride time, and work slots draw their intensity from the pool of
//! `workBlockDefinitions`, so work slots must not carry their own targets.

use serde_json::{Map, Value};

use super::leaf::{validate_alternating, validate_power_zone, validate_range};
use super::{
    CADENCE_BOUNDS, check_theme, field_path, index_path, is_cadence, is_non_empty_string,
    require_fields,
};
use crate::error::Diagnostic;
use crate::parse::{
    DurationRange, IntervalType, WorkoutMode, display_value, quoted_list, type_name, variant,
};

const TARGET_FIELDS: [&str; 3] = ["powerZone", "powerZoneRange", "alternating"];

/// One reusable work intensity. Exactly one of `powerZone`,
/// `powerZoneRange`, `alternating` must be present.
pub fn validate_work_block_definition(definition: &Value, path: &str) -> Vec<Diagnostic> {
    let mut errors = Vec::new();
    let Some(fields) = definition.as_object() else {
        errors.push(Diagnostic::new(path, "Work block definition must be an object"));
        return errors;
    };

    match fields.get("name") {
        None => errors.push(Diagnostic::new(path, "Missing required field 'name'")),
        Some(name) if !is_non_empty_string(name) => {
            errors.push(Diagnostic::new(path, "name must be a non-empty string"));
        }
        Some(_) => {}
    }

    let targets = TARGET_FIELDS
        .iter()
        .filter(|f| fields.contains_key(**f))
        .count();
    if targets == 0 {
        errors.push(Diagnostic::new(
            path,
            "Must have either 'powerZone', 'powerZoneRange', or 'alternating'",
        ));
    } else if targets > 1 {
        errors.push(Diagnostic::new(
            path,
            "Cannot have more than one of 'powerZone', 'powerZoneRange', or 'alternating'",
        ));
    }

    if let Some(zone) = fields.get("powerZone") {
        errors.extend(validate_power_zone(zone, &field_path(path, "powerZone")).err());
    }
    if let Some(range) = fields.get("powerZoneRange") {
        errors.extend(validate_range(range, &field_path(path, "powerZoneRange")));
    }
    if let Some(alternating) = fields.get("alternating") {
        errors.extend(validate_alternating(alternating, &field_path(path, "alternating")));
    }

    if let Some(cadence) = fields.get("cadence") {
        if !is_cadence(cadence) {
            errors.push(Diagnostic::new(path, format!("cadence {CADENCE_BOUNDS}")));
        }
    }

    errors
}

/// One playlist slot.
///
/// Work slots may not set `powerZone`, `powerZoneRange` or `cadence`. That
/// check and the value check run independently, so a work slot with a bad
/// zone is reported twice.
pub fn validate_roulette_slot(slot: &Value, path: &str) -> Vec<Diagnostic> {
    let mut errors = Vec::new();
    let Some(fields) = slot.as_object() else {
        errors.push(Diagnostic::new(path, "Slot must be an object"));
        return errors;
    };

    require_fields(fields, &["id"], path, &mut errors);

    let interval_type = match fields.get("intervalType") {
        None => {
            errors.push(Diagnostic::new(path, "Missing required field 'intervalType'"));
            None
        }
        Some(value) => {
            let parsed = variant::<IntervalType>(value);
            if parsed.is_none() {
                errors.push(Diagnostic::new(
                    path,
                    format!(
                        "intervalType must be 'work' or 'recovery', got '{}'",
                        display_value(value)
                    ),
                ));
            }
            parsed
        }
    };
    let is_work = interval_type == Some(IntervalType::Work);

    match fields.get("playlistId") {
        None => errors.push(Diagnostic::new(path, "Missing required field 'playlistId'")),
        Some(id) if !is_non_empty_string(id) => {
            errors.push(Diagnostic::new(path, "playlistId must be a non-empty string"));
        }
        Some(_) => {}
    }

    if let Some(range) = fields.get("durationRange") {
        if variant::<DurationRange>(range).is_none() {
            errors.push(Diagnostic::new(
                path,
                format!(
                    "durationRange must be one of {}, got '{}'",
                    quoted_list(&DurationRange::NAMES),
                    display_value(range)
                ),
            ));
        }
    }

    let zone = fields.get("powerZone");
    let range = fields.get("powerZoneRange");
    if zone.is_some() && range.is_some() {
        errors.push(Diagnostic::new(
            path,
            "Cannot have both 'powerZone' and 'powerZoneRange'",
        ));
    }

    if let Some(zone) = zone {
        if is_work {
            errors.push(not_for_work(path, "powerZone"));
        }
        errors.extend(validate_power_zone(zone, &field_path(path, "powerZone")).err());
    }

    if let Some(range) = range {
        if is_work {
            errors.push(not_for_work(path, "powerZoneRange"));
        }
        errors.extend(validate_range(range, &field_path(path, "powerZoneRange")));
    }

    if let Some(cadence) = fields.get("cadence") {
        if is_work {
            errors.push(not_for_work(path, "cadence"));
        }
        if !is_cadence(cadence) {
            errors.push(Diagnostic::new(path, format!("cadence {CADENCE_BOUNDS}")));
        }
    }

    errors
}

fn not_for_work(path: &str, field: &str) -> Diagnostic {
    Diagnostic::new(
        path,
        format!("{field} not allowed for work intervals (use workBlockDefinitions instead)"),
    )
}

/// Roulette-specific shape of a workout: mode tag, definition pool, slots,
/// theme. Workout-level `id`/`name` are the caller's concern.
pub fn validate_melodic_roulette(workout: &Value) -> Vec<Diagnostic> {
    let mut errors = Vec::new();
    let Some(fields) = workout.as_object() else {
        errors.push(Diagnostic::root(format!(
            "Workout must be an object, got {}",
            type_name(workout)
        )));
        return errors;
    };

    if WorkoutMode::of(workout) != WorkoutMode::MelodicRoulette {
        errors.push(Diagnostic::root("mode must be 'melodic-roulette'"));
    }

    check_pool(
        fields,
        "workBlockDefinitions",
        "definition",
        validate_work_block_definition,
        &mut errors,
    );
    check_pool(fields, "slots", "slot", validate_roulette_slot, &mut errors);

    check_theme(fields, &mut errors);

    errors
}

/// A required, non-empty top-level array whose elements are each validated
/// at `key[idx]`.
fn check_pool(
    fields: &Map<String, Value>,
    key: &str,
    noun: &str,
    validate_element: fn(&Value, &str) -> Vec<Diagnostic>,
    errors: &mut Vec<Diagnostic>,
) {
    match fields.get(key) {
        None => errors.push(Diagnostic::root(format!("Missing required field: '{key}'"))),
        Some(Value::Array(elements)) if elements.is_empty() => {
            errors.push(Diagnostic::root(format!(
                "'{key}' must have at least one {noun}"
            )));
        }
        Some(Value::Array(elements)) => {
            for (idx, element) in elements.iter().enumerate() {
                errors.extend(validate_element(element, &index_path("", key, idx)));
            }
        }
        Some(_) => errors.push(Diagnostic::root(format!("'{key}' must be an array"))),
    }
}
