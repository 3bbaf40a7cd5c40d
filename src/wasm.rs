//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::{Diagnostic, ValidationReport};
use crate::report::Schema;

/// Validate a workout JSON document (single workout or array).
/// Returns a `{ isValid, errors }` object.
#[wasm_bindgen]
pub fn validate_workout(json: &str) -> JsValue {
    let report = validate_inner(json, Schema::Workout);
    serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL)
}

/// Validate a ride-record JSON document (single record or array).
/// Returns a `{ isValid, errors }` object.
#[wasm_bindgen]
pub fn validate_ride(json: &str) -> JsValue {
    let report = validate_inner(json, Schema::Ride);
    serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL)
}

pub(crate) fn validate_inner(json: &str, schema: Schema) -> ValidationReport {
    match crate::parse::parse(json) {
        Ok(document) => schema.validate(&document),
        Err(e) => ValidationReport::from_errors(vec![Diagnostic::new("$", e.to_string())]),
    }
}
