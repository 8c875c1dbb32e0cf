//! End-to-end tests for a typical password rule set

use passrules::predicate::DEFAULT_SPECIAL_CHARACTERS;
use passrules::{assert_accepted, assert_rejected, assert_violations};
use passrules::{RuleKind, Validator, Violation};

fn validator() -> Validator {
    Validator::builder()
        .with_min_length(8)
        .with_max_length(24)
        .with_special_char(DEFAULT_SPECIAL_CHARACTERS)
        .with_digit()
        .with_upper_case()
        .with_lower_case()
        .with_no_repeated_chars()
        .build()
}

#[test]
fn rejects_invalid_passwords() {
    let validator = validator();

    assert!(!validator.validate(None));
    assert!(!validator.validate(""));
    assert!(!validator.validate("$Ab1")); // length < 8
    assert!(!validator.validate("$Abcdee1")); // repeated char
    assert!(!validator.validate("$abcdef1")); // no uppercase
    assert!(!validator.validate("$ABCDEF1")); // no lowercase
    assert!(!validator.validate("$Qwertyuiopasdfghjklz1234")); // length > 24
}

#[test]
fn accepts_valid_passwords() {
    let validator = validator();

    assert!(validator.validate("$Abcdef1"));
    assert!(validator.validate("$Qwertyuiopasdfghjklz123"));
}

#[test]
fn check_explains_each_rejection() {
    let validator = validator();

    assert_violations!(validator.check(None), vec![Violation::MissingInput]);
    assert_violations!(
        validator.check("$Ab1"),
        vec![Violation::Rule(RuleKind::MinLength { min: 8 })]
    );
    assert_violations!(
        validator.check("$Abcdee1"),
        vec![Violation::Rule(RuleKind::NoRepeatedChars)]
    );
    assert_violations!(
        validator.check("$abcdef1"),
        vec![Violation::Rule(RuleKind::UpperCase)]
    );
    assert_violations!(
        validator.check("$ABCDEF1"),
        vec![Violation::Rule(RuleKind::LowerCase)]
    );
    assert_violations!(
        validator.check("$Qwertyuiopasdfghjklz1234"),
        vec![Violation::Rule(RuleKind::MaxLength { max: 24 })]
    );
    assert_accepted!(validator, "$Abcdef1");
}

#[test]
fn custom_predicate_is_enforced() {
    let validator = Validator::builder()
        .with_predicate(|s: &str| s.contains('L'))
        .build();

    assert_accepted!(validator, "Linux");
    assert_rejected!(validator, "linux");
}

#[test]
fn named_predicate_appears_in_violations() {
    let validator = Validator::builder()
        .with_named_predicate("no spaces", |s: &str| !s.contains(' '))
        .build();

    let message = validator
        .check("pass word")
        .into_result()
        .unwrap_err()
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>();
    assert_eq!(message, vec!["password must satisfy rule 'no spaces'"]);
}

#[test]
fn metacharacters_in_special_set_are_literal() {
    let validator = Validator::builder().with_special_char(r"]\^").build();

    assert_accepted!(validator, "a]");
    assert_accepted!(validator, r"a\");
    assert_accepted!(validator, "^a");
    assert_rejected!(validator, "abc");
    assert_rejected!(validator, "a[");
}

#[test]
fn builder_reuse_does_not_leak_into_built_validators() {
    let builder = Validator::builder().with_min_length(4);
    let lenient = builder.build();
    let strict = builder.with_upper_case().with_digit().build();

    assert_accepted!(lenient, "abcd");
    assert_rejected!(strict, "abcd");
    assert_accepted!(strict, "Abc1");
}
