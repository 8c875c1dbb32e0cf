//! Violations reported by [`Validator::check`](crate::Validator::check)

use std::error::Error;
use std::fmt;

use crate::rule::RuleKind;

/// Why an input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Violation {
    /// No input was given. Reported alone; rules are not evaluated.
    MissingInput,
    /// A rule did not hold.
    Rule(RuleKind),
}

impl Violation {
    /// The failed rule, if this violation came from one.
    pub fn rule(&self) -> Option<&RuleKind> {
        match self {
            Violation::MissingInput => None,
            Violation::Rule(kind) => Some(kind),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingInput => write!(f, "password is missing"),
            Violation::Rule(kind) => write!(f, "password {}", kind),
        }
    }
}

impl Error for Violation {}

impl From<RuleKind> for Violation {
    fn from(kind: RuleKind) -> Self {
        Violation::Rule(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Violation::MissingInput.to_string(), "password is missing");
        assert_eq!(
            Violation::from(RuleKind::Digit).to_string(),
            "password must contain a digit"
        );
    }

    #[test]
    fn test_rule_accessor() {
        assert_eq!(Violation::MissingInput.rule(), None);
        assert_eq!(
            Violation::Rule(RuleKind::UpperCase).rule(),
            Some(&RuleKind::UpperCase)
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn Error> = Box::new(Violation::from(RuleKind::LowerCase));
        assert_eq!(err.to_string(), "password must contain a lowercase letter");
    }
}
