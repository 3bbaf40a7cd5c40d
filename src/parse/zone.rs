//! Power zone tokens: the integer form `1..=7` and the symbolic form
//! (`"Z3"`, `"zone 5+"`, `"2-"`).

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::type_name;
use crate::error::ZoneError;

pub const MIN_ZONE: u8 = 1;
pub const MAX_ZONE: u8 = 7;

static ZONE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:z(?:one)?\s*)?([1-7])([+-])?$").expect("constant regex pattern is valid")
});

/// Upper/lower nudge within a zone, written as a trailing `+` or `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneModifier {
    Plus,
    Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerZone {
    Numeric(u8),
    Symbolic {
        zone: u8,
        modifier: Option<ZoneModifier>,
    },
}

impl PowerZone {
    /// The 1-7 band this token denotes, regardless of spelling.
    pub fn zone(&self) -> u8 {
        match self {
            PowerZone::Numeric(zone) => *zone,
            PowerZone::Symbolic { zone, .. } => *zone,
        }
    }

    pub fn modifier(&self) -> Option<ZoneModifier> {
        match self {
            PowerZone::Numeric(_) => None,
            PowerZone::Symbolic { modifier, .. } => *modifier,
        }
    }

    /// Interpret a tree node as a power zone.
    pub fn from_value(value: &Value) -> Result<Self, ZoneError> {
        match value {
            Value::Number(n) => {
                if let Some(zone) = n.as_i64() {
                    if (i64::from(MIN_ZONE)..=i64::from(MAX_ZONE)).contains(&zone) {
                        return Ok(PowerZone::Numeric(zone as u8));
                    }
                    Err(ZoneError::OutOfRange(zone.to_string()))
                } else if n.is_u64() {
                    Err(ZoneError::OutOfRange(n.to_string()))
                } else {
                    Err(ZoneError::WrongType(type_name(value)))
                }
            }
            Value::String(s) => s.parse(),
            other => Err(ZoneError::WrongType(type_name(other))),
        }
    }
}

impl FromStr for PowerZone {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = ZONE_TOKEN
            .captures(s)
            .ok_or_else(|| ZoneError::InvalidFormat(s.to_string()))?;
        let zone = caps[1]
            .parse::<u8>()
            .map_err(|_| ZoneError::InvalidFormat(s.to_string()))?;
        let modifier = caps.get(2).map(|m| match m.as_str() {
            "+" => ZoneModifier::Plus,
            _ => ZoneModifier::Minus,
        });
        Ok(PowerZone::Symbolic { zone, modifier })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_in_band_are_numeric_zones() {
        for z in 1..=7 {
            assert_eq!(PowerZone::from_value(&json!(z)), Ok(PowerZone::Numeric(z as u8)));
        }
    }

    #[test]
    fn integers_outside_band_are_rejected() {
        for z in [-3, 0, 8, 100] {
            let err = PowerZone::from_value(&json!(z)).unwrap_err();
            assert_eq!(err.to_string(), format!("Power zone must be 1-7, got {z}"));
        }
        assert!(matches!(
            PowerZone::from_value(&json!(u64::MAX)),
            Err(ZoneError::OutOfRange(_))
        ));
    }

    #[test]
    fn symbolic_spellings() {
        let cases = [
            ("Z3", 3, None),
            ("z3", 3, None),
            ("zone3", 3, None),
            ("Zone 5", 5, None),
            ("ZONE  7", 7, None),
            ("3+", 3, Some(ZoneModifier::Plus)),
            ("z3-", 3, Some(ZoneModifier::Minus)),
            ("1", 1, None),
        ];
        for (token, zone, modifier) in cases {
            let parsed: PowerZone = token.parse().unwrap();
            assert_eq!(parsed.zone(), zone, "{token}");
            assert_eq!(parsed.modifier(), modifier, "{token}");
        }
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        for token in ["Z8", "zone0", "foo", "3++", "", "Z", " Z3", "Z3 ", "zon3", "7.5"] {
            let err = token.parse::<PowerZone>().unwrap_err();
            assert_eq!(err, ZoneError::InvalidFormat(token.to_string()));
        }
    }

    #[test]
    fn non_numeric_non_string_types() {
        assert_eq!(
            PowerZone::from_value(&json!(3.5)).unwrap_err().to_string(),
            "Power zone must be integer or string, got float"
        );
        assert_eq!(
            PowerZone::from_value(&json!(true)),
            Err(ZoneError::WrongType("boolean"))
        );
        assert_eq!(
            PowerZone::from_value(&json!(null)),
            Err(ZoneError::WrongType("null"))
        );
        assert_eq!(
            PowerZone::from_value(&json!({"zone": 3})),
            Err(ZoneError::WrongType("object"))
        );
    }
}
