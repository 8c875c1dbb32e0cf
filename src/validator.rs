//! The immutable validator
//!
//! A [`Validator`] owns a fixed rule set. It is cheap to clone, never
//! changes after it is built, and can be shared between threads.

use std::fmt;
use std::sync::Arc;

use crate::builder::ValidatorBuilder;
use crate::rule::{RuleKind, RuleSet};
use crate::validation::Validation;
use crate::violation::Violation;

/// Checks strings against a fixed set of rules.
///
/// # Example
///
/// ```rust
/// use passrules::Validator;
///
/// let validator = Validator::builder()
///     .with_min_length(8)
///     .with_upper_case()
///     .build();
///
/// assert!(validator.validate("Password"));
/// assert!(!validator.validate("password"));
/// assert!(!validator.validate(None));
/// ```
#[derive(Clone)]
pub struct Validator {
    rules: Arc<RuleSet>,
}

impl Validator {
    /// Start configuring a validator.
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    pub(crate) fn from_rules(rules: RuleSet) -> Self {
        Validator {
            rules: Arc::new(rules),
        }
    }

    /// Whether `input` is present and satisfies every rule.
    ///
    /// Stops at the first rule that fails. A missing input is rejected
    /// without running any rule; an empty rule set accepts any present
    /// input. A panicking predicate panics through this call.
    ///
    /// ```rust
    /// use passrules::Validator;
    ///
    /// let anything = Validator::builder().build();
    /// assert!(anything.validate(""));
    /// assert!(!anything.validate(None));
    /// ```
    pub fn validate<'a>(&self, input: impl Into<Option<&'a str>>) -> bool {
        let Some(input) = input.into() else {
            #[cfg(feature = "tracing")]
            tracing::trace!("rejecting missing input");
            return false;
        };

        for rule in self.rules.iter() {
            if !rule.check(input) {
                #[cfg(feature = "tracing")]
                tracing::trace!(rule = %rule.kind(), "input rejected");
                return false;
            }
        }
        true
    }

    /// Run every rule against `input` and collect each one that fails.
    ///
    /// Succeeds exactly when [`validate`](Self::validate) returns `true`.
    /// Violations come back in the order the rules were added; a missing
    /// input yields only [`Violation::MissingInput`].
    ///
    /// ```rust
    /// use passrules::{RuleKind, Validator, Violation};
    ///
    /// let validator = Validator::builder().with_digit().with_upper_case().build();
    ///
    /// assert!(validator.check("Abc1").is_success());
    /// assert_eq!(
    ///     validator.check("abc").errors(),
    ///     Some(&vec![
    ///         Violation::Rule(RuleKind::Digit),
    ///         Violation::Rule(RuleKind::UpperCase),
    ///     ])
    /// );
    /// assert_eq!(validator.check(None).errors(), Some(&vec![Violation::MissingInput]));
    /// ```
    pub fn check<'a>(
        &self,
        input: impl Into<Option<&'a str>>,
    ) -> Validation<&'a str, Vec<Violation>> {
        let Some(input) = input.into() else {
            return Validation::failure(vec![Violation::MissingInput]);
        };

        let violations: Vec<Violation> = self
            .rules
            .iter()
            .filter(|rule| !rule.check(input))
            .map(|rule| Violation::Rule(rule.kind().clone()))
            .collect();

        if violations.is_empty() {
            Validation::success(input)
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                failed = violations.len(),
                total = self.rules.len(),
                "input failed validation"
            );
            Validation::failure(violations)
        }
    }

    /// The rules this validator enforces, in the order they were added.
    pub fn rules(&self) -> impl Iterator<Item = &RuleKind> + '_ {
        self.rules.iter().map(|rule| rule.kind())
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the validator has no rules (and so accepts any input).
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Validators are equal when they enforce the very same rules. Rules with
/// equal behavior but built separately (two `with_min_length(8)` calls on
/// different builders) do not count as the same.
impl PartialEq for Validator {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.rules, &other.rules) || self.rules.same_rules(&other.rules)
    }
}

impl Eq for Validator {}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules().collect::<Vec<_>>())
            .finish()
    }
}
