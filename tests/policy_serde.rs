//! Loading policies from configuration (requires the `serde` feature)

#![cfg(feature = "serde")]

use passrules::{PasswordPolicy, RuleKind, SpecialCharPolicy, Violation};

#[test]
fn missing_fields_mean_no_rule() {
    let policy: PasswordPolicy = serde_json::from_str("{}").unwrap();
    assert_eq!(policy, PasswordPolicy::default());
    assert!(policy.build().is_empty());
}

#[test]
fn deserializes_full_policy() {
    let json = r#"{
        "min_length": 8,
        "max_length": 24,
        "special_chars": "default",
        "require_uppercase": true,
        "require_lowercase": true,
        "require_digit": true,
        "forbid_repeated_chars": true
    }"#;

    let policy: PasswordPolicy = serde_json::from_str(json).unwrap();
    assert_eq!(policy, PasswordPolicy::strict());

    let validator = policy.build();
    assert!(validator.validate("$Abcdef1"));
    assert!(!validator.validate("$Abcdee1"));
}

#[test]
fn deserializes_custom_special_chars() {
    let json = r#"{ "special_chars": { "custom": "_~" } }"#;
    let policy: PasswordPolicy = serde_json::from_str(json).unwrap();
    assert_eq!(
        policy.special_chars,
        Some(SpecialCharPolicy::Custom("_~".to_string()))
    );
    assert!(policy.build().validate("a~"));
}

#[test]
fn policy_round_trips() {
    let policy = PasswordPolicy::strict();
    let json = serde_json::to_string(&policy).unwrap();
    let back: PasswordPolicy = serde_json::from_str(&json).unwrap();
    assert_eq!(back, policy);
}

#[test]
fn violations_serialize_with_rule_tag() {
    let value = serde_json::to_value(Violation::Rule(RuleKind::MinLength { min: 8 })).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "rule": { "rule": "min_length", "min": 8 } })
    );

    let value = serde_json::to_value(Violation::MissingInput).unwrap();
    assert_eq!(value, serde_json::json!("missing_input"));
}
