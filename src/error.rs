//! Diagnostic and load error types shared by every validator.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single schema violation, located by its structural path in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Structural location such as `sequence[2].alternating`. Empty for
    /// workout-level errors.
    pub path: String,
    pub message: String,
    /// 1-based position of the owning workout when the file holds several.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<usize>,
}

impl Diagnostic {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Diagnostic {
            path: path.into(),
            message: message.into(),
            document: None,
        }
    }

    /// A diagnostic on the document root.
    pub fn root(message: impl Into<String>) -> Self {
        Diagnostic::new(String::new(), message)
    }

    /// Attribute this diagnostic to the `n`th (1-based) workout of a file.
    pub fn in_document(mut self, n: usize) -> Self {
        self.document = Some(n);
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(n) = self.document {
            write!(f, "Workout {n}: ")?;
        }
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Accumulated result of validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    is_valid: bool,
    errors: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<Diagnostic>) -> Self {
        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Diagnostic> {
        self.errors
    }

    /// Rendered diagnostics in report order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Failure to obtain a document tree at all. Halts checking of that file only.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {source}")]
    Syntax {
        #[from]
        source: serde_json::Error,
    },
}

/// Why a value is not a power zone. The Display text is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    #[error("Power zone must be 1-7, got {0}")]
    OutOfRange(String),

    #[error("Invalid power zone format: '{0}'")]
    InvalidFormat(String),

    #[error("Power zone must be integer or string, got {0}")]
    WrongType(&'static str),
}
