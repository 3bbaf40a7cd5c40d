pub mod error;
pub mod parse;
pub mod report;
pub mod validate;
pub mod wasm;

pub use error::{Diagnostic, LoadError, ValidationReport, ZoneError};
pub use parse::PowerZone;
pub use validate::validate_workout;
