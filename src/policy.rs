//! Declarative password policies
//!
//! A [`PasswordPolicy`] describes the built-in rules as plain data, which is
//! handy when the rules live in application configuration. With the `serde`
//! feature enabled it can be deserialized; missing fields mean "no rule".
//!
//! # Example
//!
//! ```rust
//! use passrules::{PasswordPolicy, SpecialCharPolicy};
//!
//! let policy = PasswordPolicy {
//!     min_length: Some(10),
//!     special_chars: Some(SpecialCharPolicy::Default),
//!     require_digit: true,
//!     ..PasswordPolicy::default()
//! };
//!
//! let validator = policy.build();
//! assert!(validator.validate("correct-horse1"));
//! assert!(!validator.validate("correct-horse"));
//! ```

use crate::builder::ValidatorBuilder;
use crate::validator::Validator;

/// Which special characters a policy requires.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpecialCharPolicy {
    /// [`DEFAULT_SPECIAL_CHARACTERS`](crate::predicate::DEFAULT_SPECIAL_CHARACTERS).
    Default,
    /// A caller-chosen set, taken literally.
    Custom(String),
}

/// Built-in rules described as data.
///
/// The [`Default`] policy has no rules at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PasswordPolicy {
    /// Minimum length in characters.
    pub min_length: Option<usize>,
    /// Maximum length in characters.
    pub max_length: Option<usize>,
    /// Required special characters.
    pub special_chars: Option<SpecialCharPolicy>,
    /// Require an ASCII uppercase letter.
    pub require_uppercase: bool,
    /// Require an ASCII lowercase letter.
    pub require_lowercase: bool,
    /// Require an ASCII digit.
    pub require_digit: bool,
    /// Reject strings that repeat any character.
    pub forbid_repeated_chars: bool,
}

impl PasswordPolicy {
    /// 8 to 24 characters with a default special character, a digit, both
    /// letter cases and no repeated character.
    pub fn strict() -> Self {
        PasswordPolicy {
            min_length: Some(8),
            max_length: Some(24),
            special_chars: Some(SpecialCharPolicy::Default),
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            forbid_repeated_chars: true,
        }
    }

    /// A builder preloaded with this policy's rules, ready for custom
    /// predicates on top.
    pub fn to_builder(&self) -> ValidatorBuilder {
        let mut builder = Validator::builder();

        if let Some(min) = self.min_length {
            builder = builder.with_min_length(min);
        }
        if let Some(max) = self.max_length {
            builder = builder.with_max_length(max);
        }
        builder = match &self.special_chars {
            Some(SpecialCharPolicy::Default) => builder.with_special_char(None),
            Some(SpecialCharPolicy::Custom(chars)) => builder.with_special_char(chars.as_str()),
            None => builder,
        };
        if self.require_digit {
            builder = builder.with_digit();
        }
        if self.require_uppercase {
            builder = builder.with_upper_case();
        }
        if self.require_lowercase {
            builder = builder.with_lower_case();
        }
        if self.forbid_repeated_chars {
            builder = builder.with_no_repeated_chars();
        }
        builder
    }

    /// Build a validator enforcing exactly this policy.
    pub fn build(&self) -> Validator {
        self.to_builder().build()
    }
}
