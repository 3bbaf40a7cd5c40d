//! Per-file checking and the one-line summaries printed for valid documents.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::error::{Diagnostic, LoadError, ValidationReport};
use crate::parse::{self, WorkoutMode};
use crate::validate::{validate_ride_document, validate_workout_document};

/// Which document family a file is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    Workout,
    Ride,
}

impl Schema {
    pub fn validate(self, document: &Value) -> ValidationReport {
        match self {
            Schema::Workout => validate_workout_document(document),
            Schema::Ride => validate_ride_document(document),
        }
    }

    /// Summary lines for a document that passed validation.
    pub fn summarize(self, document: &Value) -> Vec<String> {
        let entries: Vec<&Value> = match document {
            Value::Array(items) => items.iter().collect(),
            single => vec![single],
        };
        let label = entries.len() > 1;
        entries
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| {
                let prefix = if label {
                    format!("Workout {}: ", idx + 1)
                } else {
                    String::new()
                };
                match self {
                    Schema::Workout => format!("{prefix}{}", WorkoutSummary::of(entry)),
                    Schema::Ride => {
                        format!("{prefix}Workout '{}' is valid", text_or(entry, "id", "unknown"))
                    }
                }
            })
            .collect()
    }
}

/// A document that was loaded and validated.
#[derive(Debug)]
pub struct Checked {
    pub document: Value,
    pub report: ValidationReport,
}

/// Load `path` and validate it. A load failure means no tree exists, so it
/// is returned instead of a report.
pub fn check_file(path: &Path, schema: Schema) -> Result<Checked, LoadError> {
    let document = parse::load_file(path)?;
    let report = schema.validate(&document);
    Ok(Checked { document, report })
}

/// Shape of a valid workout, as shown on its success line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSummary {
    pub name: String,
    pub id: String,
    pub layout: Layout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Standard { items: usize },
    MelodicRoulette { slots: usize, work_blocks: usize },
}

impl WorkoutSummary {
    pub fn of(workout: &Value) -> Self {
        let layout = match WorkoutMode::of(workout) {
            WorkoutMode::MelodicRoulette => Layout::MelodicRoulette {
                slots: array_len(workout, "slots"),
                work_blocks: array_len(workout, "workBlockDefinitions"),
            },
            WorkoutMode::Standard => Layout::Standard {
                items: if workout.get("sequence").is_some() {
                    array_len(workout, "sequence")
                } else {
                    array_len(workout, "intervals")
                },
            },
        };
        WorkoutSummary {
            name: text_or(workout, "name", "Unknown"),
            id: text_or(workout, "id", "unknown"),
            layout,
        }
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({}) is valid - ", self.name, self.id)?;
        match self.layout {
            Layout::Standard { items } => write!(f, "{items} items"),
            Layout::MelodicRoulette { slots, work_blocks } => write!(
                f,
                "Melodic Roulette: {slots} slots, {work_blocks} work blocks"
            ),
        }
    }
}

fn array_len(value: &Value, key: &str) -> usize {
    value
        .get(key)
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

fn text_or(value: &Value, key: &str, fallback: &str) -> String {
    value
        .get(key)
        .map_or_else(|| fallback.to_string(), parse::display_value)
}

// ---------------------------------------------------------------------------
// Machine-readable output
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
    pub errors: Vec<Diagnostic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FileStatus {
    Valid,
    Invalid,
    NotFound,
    Unreadable,
    InvalidJson,
}

impl FileReport {
    pub fn new(path: &Path, outcome: &Result<Checked, LoadError>) -> Self {
        let (status, errors, load_error) = match outcome {
            Ok(checked) if checked.report.is_valid() => (FileStatus::Valid, Vec::new(), None),
            Ok(checked) => (FileStatus::Invalid, checked.report.errors().to_vec(), None),
            Err(e) => {
                let status = match e {
                    LoadError::NotFound { .. } => FileStatus::NotFound,
                    LoadError::Io { .. } => FileStatus::Unreadable,
                    LoadError::Syntax { .. } => FileStatus::InvalidJson,
                };
                (status, Vec::new(), Some(e.to_string()))
            }
        };
        FileReport {
            path: path.to_path_buf(),
            status,
            errors,
            load_error,
        }
    }

    pub fn passed(&self) -> bool {
        self.status == FileStatus::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn standard_summary_prefers_sequence_length() {
        let workout = json!({
            "id": "w1",
            "name": "Pyramid",
            "sequence": [{}, {}, {}],
            "intervals": [{}]
        });
        assert_eq!(
            WorkoutSummary::of(&workout).to_string(),
            "'Pyramid' (w1) is valid - 3 items"
        );
    }

    #[test]
    fn legacy_summary_counts_intervals() {
        let workout = json!({"id": "w2", "name": "Legacy", "intervals": [{}, {}]});
        assert_eq!(
            WorkoutSummary::of(&workout).layout,
            Layout::Standard { items: 2 }
        );
    }

    #[test]
    fn roulette_summary_counts_slots_and_blocks() {
        let workout = json!({
            "id": "mr",
            "name": "Spin",
            "mode": "melodic-roulette",
            "workBlockDefinitions": [{}],
            "slots": [{}, {}]
        });
        assert_eq!(
            WorkoutSummary::of(&workout).to_string(),
            "'Spin' (mr) is valid - Melodic Roulette: 2 slots, 1 work blocks"
        );
    }

    #[test]
    fn missing_name_and_id_fall_back() {
        let summary = WorkoutSummary::of(&json!({"id": 7}));
        assert_eq!(summary.name, "Unknown");
        assert_eq!(summary.id, "7");
    }

    #[test]
    fn ride_summaries_are_labelled_for_arrays() {
        let rides = json!([{"id": "a"}, {"id": "b"}]);
        assert_eq!(
            Schema::Ride.summarize(&rides),
            vec!["Workout 1: Workout 'a' is valid", "Workout 2: Workout 'b' is valid"]
        );
    }
}
