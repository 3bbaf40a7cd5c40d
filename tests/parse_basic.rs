//! Integration tests for the parse phase: loading documents and reading
//! power zone tokens.

use std::io::Write;

use serde_json::json;
use workout_validator::error::{LoadError, ZoneError};
use workout_validator::parse::{self, PowerZone, ZoneModifier};
use workout_validator::validate;

#[test]
fn parse_fixture_document() {
    let document = parse::parse(include_str!("fixtures/pyramid_power.json")).expect("Should parse");
    assert_eq!(document["id"], "pyramid-power-30");
    assert_eq!(document["sequence"].as_array().map(Vec::len), Some(3));
}

#[test]
fn parse_invalid_json_returns_syntax_error() {
    let err = parse::parse("{\"id\": \"a\",").unwrap_err();
    assert!(matches!(err, LoadError::Syntax { .. }));
    assert!(err.to_string().starts_with("Invalid JSON: "));
}

#[test]
fn load_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    let err = parse::load_file(&path).unwrap_err();
    assert!(matches!(err, LoadError::NotFound { .. }));
    assert_eq!(err.to_string(), format!("File not found: {}", path.display()));
}

#[test]
fn load_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"[{"id": "a"}, {"id": "b"}]"#).unwrap();
    let document = parse::load_file(file.path()).expect("Should load");
    assert_eq!(document, json!([{"id": "a"}, {"id": "b"}]));
}

#[test]
fn every_integer_zone_in_band_and_no_other() {
    for z in -20i64..=20 {
        let valid = PowerZone::from_value(&json!(z)).is_ok();
        assert_eq!(valid, (1..=7).contains(&z), "zone {z}");
    }
}

#[test]
fn integer_and_symbolic_forms_share_the_same_bands() {
    for z in 1u8..=7 {
        let numeric = PowerZone::from_value(&json!(z)).unwrap();
        let symbolic = PowerZone::from_value(&json!(format!("Z{z}"))).unwrap();
        assert_eq!(numeric.zone(), symbolic.zone());
    }
}

#[test]
fn accepted_string_tokens() {
    for token in ["Z3", "z3", "zone3", "Zone 3", "ZONE\t3", "3", "3+", "z3-", "Z7+", "zone 1-"] {
        assert!(
            token.parse::<PowerZone>().is_ok(),
            "{token:?} should be a power zone"
        );
    }
    assert_eq!(
        "zone 4+".parse::<PowerZone>().unwrap(),
        PowerZone::Symbolic {
            zone: 4,
            modifier: Some(ZoneModifier::Plus)
        }
    );
}

#[test]
fn rejected_string_tokens() {
    for token in ["Z8", "zone0", "foo", "3++", "Z3+-", "zz3", "Z-3", "+3", "z one 3"] {
        assert_eq!(
            token.parse::<PowerZone>(),
            Err(ZoneError::InvalidFormat(token.to_string())),
            "{token:?} should be rejected"
        );
    }
}

#[test]
fn zone_diagnostics_name_the_received_value() {
    let messages: Vec<String> = [json!(8), json!("Z0"), json!([3]), json!(2.5)]
        .iter()
        .filter_map(|z| validate::validate_power_zone(z, "p").err())
        .map(|d| d.to_string())
        .collect();
    assert_eq!(
        messages,
        vec![
            "p: Power zone must be 1-7, got 8",
            "p: Invalid power zone format: 'Z0'",
            "p: Power zone must be integer or string, got array",
            "p: Power zone must be integer or string, got float",
        ]
    );
}
