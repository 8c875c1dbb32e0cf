//! Fluent builder for [`Validator`]
//!
//! Obtain one with [`Validator::builder`], chain `with_*` calls, then
//! [`build`](ValidatorBuilder::build). Building snapshots the rules, so a
//! builder can keep growing after it has produced validators without
//! changing them.
//!
//! # Example
//!
//! ```rust
//! use passrules::Validator;
//!
//! let validator = Validator::builder()
//!     .with_min_length(8)
//!     .with_max_length(24)
//!     .with_special_char(None)
//!     .with_digit()
//!     .with_upper_case()
//!     .with_lower_case()
//!     .with_no_repeated_chars()
//!     .build();
//!
//! assert!(validator.validate("$Abcdef1"));
//! assert!(!validator.validate("$Abcdee1"));
//! ```

use std::sync::Arc;

use crate::predicate::{
    max_length, min_length, special_chars, Predicate, HAS_DIGIT, HAS_LOWERCASE, HAS_UPPERCASE,
    NO_REPEATED_CHARS,
};
use crate::rule::{Rule, RuleKind, RuleSet};
use crate::validator::Validator;

/// Accumulates rules for a [`Validator`].
#[derive(Clone, Debug)]
pub struct ValidatorBuilder {
    rules: RuleSet,
}

impl ValidatorBuilder {
    pub(crate) fn new() -> Self {
        ValidatorBuilder {
            rules: RuleSet::default(),
        }
    }

    fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.insert(rule);
        self
    }

    /// Add a custom rule.
    ///
    /// Rules may run in any order and must not depend on each other, so
    /// the predicate must be pure. Passing one of the default predicates
    /// (such as [`HAS_DIGIT`](crate::predicate::HAS_DIGIT)) registers it
    /// exactly like the matching convenience method would.
    ///
    /// # Example
    ///
    /// ```rust
    /// use passrules::Validator;
    ///
    /// let validator = Validator::builder()
    ///     .with_predicate(|s: &str| s.contains('L'))
    ///     .build();
    /// assert!(validator.validate("Linux"));
    /// assert!(!validator.validate("BSD"));
    /// ```
    pub fn with_predicate<P>(self, predicate: P) -> Self
    where
        P: Predicate<str> + 'static,
    {
        let kind = RuleKind::of_default::<P>().unwrap_or(RuleKind::Custom { name: None });
        self.with_rule(Rule::new(kind, predicate))
    }

    /// Add a custom rule if one is given; `None` leaves the builder as is.
    ///
    /// ```rust
    /// use passrules::Validator;
    ///
    /// let maybe_rule: Option<fn(&str) -> bool> = None;
    /// let validator = Validator::builder().with_optional_predicate(maybe_rule).build();
    /// assert!(validator.is_empty());
    /// ```
    pub fn with_optional_predicate<P>(self, predicate: Option<P>) -> Self
    where
        P: Predicate<str> + 'static,
    {
        match predicate {
            Some(predicate) => self.with_predicate(predicate),
            None => self,
        }
    }

    /// Add a custom rule with a name that shows up in violations.
    pub fn with_named_predicate<P>(self, name: impl Into<String>, predicate: P) -> Self
    where
        P: Predicate<str> + 'static,
    {
        let kind = RuleKind::Custom {
            name: Some(name.into()),
        };
        self.with_rule(Rule::new(kind, predicate))
    }

    /// Add a rule that may be shared across builders.
    ///
    /// Sharing is by identity: adding the same `Arc` twice registers it once.
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use passrules::{predicate::Predicate, Validator};
    ///
    /// let no_spaces: Arc<dyn Predicate<str>> = Arc::new(|s: &str| !s.contains(' '));
    /// let validator = Validator::builder()
    ///     .with_shared_predicate(Arc::clone(&no_spaces))
    ///     .with_shared_predicate(no_spaces)
    ///     .build();
    /// assert_eq!(validator.len(), 1);
    /// ```
    pub fn with_shared_predicate(self, predicate: Arc<dyn Predicate<str>>) -> Self {
        self.with_rule(Rule::shared(RuleKind::Custom { name: None }, predicate))
    }

    /// Require at least `min` characters.
    pub fn with_min_length(self, min: usize) -> Self {
        self.with_rule(Rule::new(RuleKind::MinLength { min }, min_length(min)))
    }

    /// Require at most `max` characters.
    pub fn with_max_length(self, max: usize) -> Self {
        self.with_rule(Rule::new(RuleKind::MaxLength { max }, max_length(max)))
    }

    /// Require one character from `chars`, or from
    /// [`DEFAULT_SPECIAL_CHARACTERS`](crate::predicate::DEFAULT_SPECIAL_CHARACTERS)
    /// when `chars` is `None`. Every character in `chars` is taken literally.
    ///
    /// ```rust
    /// use passrules::Validator;
    ///
    /// let brackets = Validator::builder().with_special_char("[]").build();
    /// assert!(brackets.validate("a]"));
    /// assert!(!brackets.validate("a!"));
    ///
    /// let defaults = Validator::builder().with_special_char(None).build();
    /// assert!(defaults.validate("a!"));
    /// ```
    pub fn with_special_char<'a>(self, chars: impl Into<Option<&'a str>>) -> Self {
        let predicate = special_chars(chars);
        let kind = RuleKind::SpecialChar {
            chars: predicate.chars().to_string(),
        };
        self.with_rule(Rule::new(kind, predicate))
    }

    /// Require an uppercase letter.
    pub fn with_upper_case(self) -> Self {
        self.with_rule(Rule::new(RuleKind::UpperCase, HAS_UPPERCASE))
    }

    /// Require a lowercase letter.
    pub fn with_lower_case(self) -> Self {
        self.with_rule(Rule::new(RuleKind::LowerCase, HAS_LOWERCASE))
    }

    /// Require a digit.
    pub fn with_digit(self) -> Self {
        self.with_rule(Rule::new(RuleKind::Digit, HAS_DIGIT))
    }

    /// Reject any string in which a character occurs more than once.
    pub fn with_no_repeated_chars(self) -> Self {
        self.with_rule(Rule::new(RuleKind::NoRepeatedChars, NO_REPEATED_CHARS))
    }

    /// Number of rules collected so far.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule has been added yet.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Snapshot the collected rules into a [`Validator`].
    pub fn build(&self) -> Validator {
        #[cfg(feature = "tracing")]
        tracing::debug!(rules = self.rules.len(), "building validator");

        Validator::from_rules(self.rules.clone())
    }
}
