//! Closed string vocabularies of the workout format.
//!
//! Each enum deserializes straight from a tree node, so validators match on a
//! variant instead of comparing raw strings.

use serde::de::value::{Error as VariantError, StrDeserializer};
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Interpret a tree node as one of a closed set of variants. Only bare
/// strings qualify.
pub fn variant<T: DeserializeOwned>(value: &Value) -> Option<T> {
    let name: StrDeserializer<'_, VariantError> = value.as_str()?.into_deserializer();
    T::deserialize(name).ok()
}

/// `['a', 'b', 'c']`, the form used when a diagnostic lists the accepted values.
pub fn quoted_list(names: &[&str]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{n}'")).collect();
    format!("[{}]", quoted.join(", "))
}

// =============================================================================
// WORKOUT LEVEL
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkoutMode {
    Standard,
    MelodicRoulette,
}

impl WorkoutMode {
    /// Absent or unrecognized `mode` selects the standard format.
    pub fn of(workout: &Value) -> Self {
        workout
            .get("mode")
            .and_then(variant)
            .unwrap_or(WorkoutMode::Standard)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Default,
    Halloween,
    Christmas,
    Wintry,
    Valentines,
    Holyhill,
    Criterium,
    Custom,
}

impl Theme {
    pub const NAMES: [&'static str; 8] = [
        "default",
        "halloween",
        "christmas",
        "wintry",
        "valentines",
        "holyhill",
        "criterium",
        "custom",
    ];
}

// =============================================================================
// STANDARD MODE
// =============================================================================

/// The `type` discriminator of a sequence item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceItemKind {
    Interval,
    Block,
}

// =============================================================================
// MELODIC ROULETTE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalType {
    Work,
    Recovery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationRange {
    Short,
    Medium,
    Long,
}

impl DurationRange {
    pub const NAMES: [&'static str; 3] = ["short", "medium", "long"];
}

// =============================================================================
// RIDE RECORDS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RideType {
    Recovery,
    Endurance,
    Tempo,
    Threshold,
    Interval,
    Race,
    Other,
}

impl RideType {
    pub const NAMES: [&'static str; 7] = [
        "recovery",
        "endurance",
        "tempo",
        "threshold",
        "interval",
        "race",
        "other",
    ];
}
