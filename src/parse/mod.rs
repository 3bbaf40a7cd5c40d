//! Parse phase: JSON text → untyped document tree, plus the typed leaf
//! vocabulary (power zones and the string enums) the validators match on.

pub mod types;
pub mod zone;

pub use types::*;
pub use zone::{PowerZone, ZoneModifier};

use std::path::Path;

use serde_json::Value;

use crate::error::LoadError;

/// Decode a JSON document into the tree the validators walk.
pub fn parse(json: &str) -> Result<Value, LoadError> {
    Ok(serde_json::from_str::<Value>(json)?)
}

/// Read and decode a document from disk.
pub fn load_file(path: &Path) -> Result<Value, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    parse(&text)
}

/// Name of a JSON value's type as it appears in diagnostics.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Render a value for a `got '...'` clause: strings bare, everything else as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
