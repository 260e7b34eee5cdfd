//! Tests for tokens, wire shapes, and error codes.

use slc_core::errors::{SlcError, SlcErrorCode, StoreError, ValidationError};
use slc_core::models::*;

#[test]
fn area_parses_case_insensitively() {
    assert_eq!("class1".parse::<Area>().unwrap(), Area::Class1);
    assert_eq!("CLASS2".parse::<Area>().unwrap(), Area::Class2);
    assert_eq!(" General ".parse::<Area>().unwrap(), Area::General);
    assert_eq!("none".parse::<Area>().unwrap(), Area::None);
    assert_eq!("All".parse::<Area>().unwrap(), Area::All);
}

#[test]
fn unknown_area_is_a_validation_error() {
    let err = "class3".parse::<Area>().unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnknownArea {
            token: "class3".to_string()
        }
    );
}

#[test]
fn all_expands_to_every_concrete_area() {
    assert_eq!(Area::All.targets(), &Area::CONCRETE);
    assert_eq!(Area::General.targets(), &[Area::General]);
}

#[test]
fn slot_and_variant_tokens() {
    assert_eq!("Class1".parse::<Slot>().unwrap(), Slot::Class1);
    assert!("general".parse::<Slot>().is_err());

    assert_eq!("none".parse::<Variant>().unwrap(), Variant::None);
    assert!("NONE".parse::<Variant>().is_err());
    assert!("maybe".parse::<Variant>().is_err());
}

#[test]
fn snapshot_uses_camel_case_field_names() {
    let snap = Snapshot {
        class1: Class::new("Cat", ["purr"]),
        class2: Class::new("Dog", ["bark"]),
        general_class: vec!["whiskers".to_string()],
        none_class: vec![],
    };
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["class1"]["name"], "Cat");
    assert_eq!(json["generalClass"][0], "whiskers");
    assert!(json["noneClass"].as_array().unwrap().is_empty());
}

#[test]
fn classify_outcome_wire_shape() {
    let outcome = ClassifyOutcome {
        guess: "Cat".to_string(),
        known_hits: vec!["purr".to_string()],
        ..Default::default()
    };
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["knownHits"][0], "purr");
    assert!(outcome.is_decisive());
}

#[test]
fn class_deserializes_with_missing_properties() {
    let class: Class = serde_json::from_str(r#"{"name":"Cat"}"#).unwrap();
    assert_eq!(class.name, "Cat");
    assert!(class.properties.is_empty());
}

#[test]
fn empty_record_is_uninitialized() {
    let record = UserRecord::empty("u1");
    assert_eq!(record.user_id, "u1");
    assert!(!record.is_initialized());
}

#[test]
fn error_codes_follow_the_subsystem() {
    let validation: SlcError = ValidationError::EmptyClassName.into();
    assert_eq!(validation.error_code(), "VALIDATION_ERROR");
    assert!(validation.is_validation());

    let corrupt: SlcError = StoreError::CorruptRecord {
        user_id: "u1".to_string(),
        message: "bad json".to_string(),
    }
    .into();
    assert_eq!(corrupt.error_code(), "CORRUPT_RECORD");
    assert!(corrupt.coded_string().starts_with("[CORRUPT_RECORD]"));
}
