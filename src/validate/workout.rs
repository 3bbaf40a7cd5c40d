//! Top-level workout dispatch.

use serde_json::{Map, Value};
use tracing::debug;

use super::roulette::validate_melodic_roulette;
use super::standard::{validate_block, validate_interval, validate_sequence};
use super::{check_theme, index_path, is_positive_integer};
use crate::error::{Diagnostic, ValidationReport};
use crate::parse::{WorkoutMode, type_name};

/// Validate one workout in either mode.
///
/// `id` and `name` are checked first in both modes. A `mode` of
/// `melodic-roulette` then hands the rest of the document to the roulette
/// validator; any other value, or none, selects the standard format.
pub fn validate_workout(workout: &Value) -> ValidationReport {
    let Some(fields) = workout.as_object() else {
        return ValidationReport::from_errors(vec![Diagnostic::root(format!(
            "Workout must be an object, got {}",
            type_name(workout)
        ))]);
    };

    let mut errors = Vec::new();
    for field in ["id", "name"] {
        if !fields.contains_key(field) {
            errors.push(Diagnostic::root(format!("Missing required field: '{field}'")));
        }
    }

    let mode = WorkoutMode::of(workout);
    match mode {
        WorkoutMode::MelodicRoulette => errors.extend(validate_melodic_roulette(workout)),
        WorkoutMode::Standard => check_standard(fields, &mut errors),
    }

    debug!(?mode, errors = errors.len(), "validated workout");
    ValidationReport::from_errors(errors)
}

/// A decoded workout file: a single workout, or an array of them. Errors of
/// array elements are labelled `Workout <n>: ` when there is more than one.
pub fn validate_workout_document(document: &Value) -> ValidationReport {
    match document {
        Value::Array(workouts) if workouts.is_empty() => ValidationReport::from_errors(vec![
            Diagnostic::root("Workout file contains no workouts"),
        ]),
        Value::Array(workouts) => {
            let label = workouts.len() > 1;
            let errors = workouts
                .iter()
                .enumerate()
                .flat_map(|(idx, workout)| {
                    validate_workout(workout)
                        .into_errors()
                        .into_iter()
                        .map(move |e| {
                            if label {
                                e.in_document(idx + 1)
                            } else {
                                e
                            }
                        })
                })
                .collect();
            ValidationReport::from_errors(errors)
        }
        workout => validate_workout(workout),
    }
}

fn check_standard(fields: &Map<String, Value>, errors: &mut Vec<Diagnostic>) {
    let sequence = fields.get("sequence");
    let intervals = fields.get("intervals");

    if sequence.is_none() && intervals.is_none() {
        errors.push(Diagnostic::root(
            "Workout must have either 'intervals' or 'sequence' array",
        ));
    }

    if let Some(sequence) = sequence {
        match sequence.as_array() {
            Some(items) => errors.extend(validate_sequence(items)),
            None => errors.push(Diagnostic::root("'sequence' must be an array")),
        }
    }

    if let Some(intervals) = intervals {
        match intervals.as_array() {
            Some(items) => {
                for (idx, interval) in items.iter().enumerate() {
                    errors.extend(validate_interval(interval, &index_path("", "intervals", idx)));
                }
            }
            None => errors.push(Diagnostic::root("'intervals' must be an array")),
        }
    }

    if let Some(blocks) = fields.get("blocks") {
        match blocks.as_array() {
            Some(items) => {
                for (idx, block) in items.iter().enumerate() {
                    errors.extend(validate_block(block, &index_path("", "blocks", idx)));
                }
            }
            None => errors.push(Diagnostic::root("'blocks' must be an array")),
        }
    }

    if let Some(total) = fields.get("totalDuration") {
        if !is_positive_integer(total) {
            errors.push(Diagnostic::root("totalDuration must be a positive integer"));
        }
    }

    check_theme(fields, errors);
}
