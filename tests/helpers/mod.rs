use serde_json::{Value, json};
use workout_validator::error::ValidationReport;

// =============================================================================
// Workout builders
// =============================================================================

/// Minimal valid interval with an integer power zone.
pub fn interval(id: &str, zone: Value) -> Value {
    json!({
        "id": id,
        "name": format!("Interval {id}"),
        "duration": 60,
        "powerZone": zone
    })
}

/// The same interval tagged for a `sequence`.
pub fn sequence_interval(id: &str, zone: Value) -> Value {
    tagged("interval", interval(id, zone))
}

pub fn block(id: &str, repetitions: Value, intervals: Vec<Value>) -> Value {
    json!({
        "id": id,
        "name": format!("Block {id}"),
        "repetitions": repetitions,
        "intervals": intervals
    })
}

pub fn tagged(kind: &str, mut item: Value) -> Value {
    item["type"] = json!(kind);
    item
}

/// Standard workout wrapping the given sequence.
pub fn standard_workout(sequence: Vec<Value>) -> Value {
    json!({ "id": "a", "name": "b", "sequence": sequence })
}

/// Melodic-roulette workout with the given pools.
pub fn roulette_workout(definitions: Vec<Value>, slots: Vec<Value>) -> Value {
    json!({
        "id": "a",
        "name": "b",
        "mode": "melodic-roulette",
        "workBlockDefinitions": definitions,
        "slots": slots
    })
}

pub fn slot(id: &str, interval_type: &str) -> Value {
    json!({ "id": id, "intervalType": interval_type, "playlistId": "p1" })
}

/// Set `key` on an object node.
pub fn with(mut value: Value, key: &str, field: Value) -> Value {
    value[key] = field;
    value
}

/// Remove `key` from an object node.
pub fn without(mut value: Value, key: &str) -> Value {
    if let Some(fields) = value.as_object_mut() {
        fields.remove(key);
    }
    value
}

// =============================================================================
// Assertions
// =============================================================================

pub fn rendered(report: &ValidationReport) -> String {
    report.messages().join("\n")
}

pub fn assert_has_error(report: &ValidationReport, expected: &str) {
    assert!(
        report.messages().iter().any(|m| m.contains(expected)),
        "Expected an error containing {:?}, got: {:#?}",
        expected,
        report.messages()
    );
}

pub fn assert_valid(report: &ValidationReport) {
    assert!(
        report.is_valid(),
        "Expected no validation errors, got: {:#?}",
        report.messages()
    );
    assert!(report.errors().is_empty());
}
