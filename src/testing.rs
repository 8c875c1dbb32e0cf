//! Assertion macros for tests that exercise validators
//!
//! ```rust
//! use passrules::{assert_accepted, assert_rejected, assert_violations};
//! use passrules::{RuleKind, Validator, Violation};
//!
//! let validator = Validator::builder().with_digit().build();
//!
//! assert_accepted!(validator, "abc1");
//! assert_rejected!(validator, "abc");
//! assert_violations!(validator.check("abc"), vec![Violation::Rule(RuleKind::Digit)]);
//! ```

/// Assert that a validator accepts an input, both through `validate` and
/// through `check`.
///
/// On failure the panic message lists every violated rule.
#[macro_export]
macro_rules! assert_accepted {
    ($validator:expr, $input:expr) => {{
        let validator = &$validator;
        let input = $input;
        match validator.check(input) {
            $crate::Validation::Success(_) => {
                assert!(
                    validator.validate(input),
                    "check accepted {:?} but validate rejected it",
                    input
                );
            }
            $crate::Validation::Failure(violations) => {
                panic!("Expected {:?} to be accepted, got: {:?}", input, violations);
            }
        }
    }};
}

/// Assert that a validator rejects an input, both through `validate` and
/// through `check`.
#[macro_export]
macro_rules! assert_rejected {
    ($validator:expr, $input:expr) => {{
        let validator = &$validator;
        let input = $input;
        match validator.check(input) {
            $crate::Validation::Failure(_) => {
                assert!(
                    !validator.validate(input),
                    "check rejected {:?} but validate accepted it",
                    input
                );
            }
            $crate::Validation::Success(v) => {
                panic!("Expected {:?} to be rejected, got Success: {:?}", input, v);
            }
        }
    }};
}

/// Assert that a validation succeeds.
///
/// ```rust
/// use passrules::{assert_success, Validator};
///
/// let validator = Validator::builder().with_upper_case().build();
/// assert_success!(validator.check("Abc"));
/// ```
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails, whatever the violations.
///
/// ```rust
/// use passrules::{assert_failure, Validator};
///
/// let validator = Validator::builder().with_upper_case().build();
/// assert_failure!(validator.check("abc"));
/// assert_failure!(validator.check(None));
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation fails with exactly the given violations.
#[macro_export]
macro_rules! assert_violations {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(violations) => {
                assert_eq!(violations, $expected);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure with violations {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{RuleKind, Validator, Violation};

    fn digits() -> Validator {
        Validator::builder().with_digit().build()
    }

    #[test]
    fn assert_accepted_macro() {
        assert_accepted!(digits(), "a1");
    }

    #[test]
    fn assert_rejected_macro() {
        assert_rejected!(digits(), "a");
        assert_rejected!(digits(), None);
    }

    #[test]
    fn assert_success_macro() {
        assert_success!(digits().check("a1"));
        assert_success!(Validator::builder().build().check(""));
    }

    #[test]
    fn assert_failure_macro() {
        assert_failure!(digits().check("a"));
        assert_failure!(digits().check(None));
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        assert_success!(digits().check("a"));
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        assert_failure!(digits().check("a1"));
    }

    #[test]
    fn assert_violations_macro() {
        assert_violations!(digits().check("a"), vec![Violation::Rule(RuleKind::Digit)]);
    }

    #[test]
    #[should_panic(expected = "to be accepted")]
    fn assert_accepted_panics_on_rejection() {
        assert_accepted!(digits(), "a");
    }

    #[test]
    #[should_panic(expected = "to be rejected")]
    fn assert_rejected_panics_on_acceptance() {
        assert_rejected!(digits(), "a1");
    }

    #[test]
    #[should_panic(expected = "Expected Failure with violations")]
    fn assert_violations_panics_on_success() {
        assert_violations!(digits().check("a1"), vec![Violation::Rule(RuleKind::Digit)]);
    }
}
