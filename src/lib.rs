//! # passrules
//!
//! Composable password rules: build once, validate many.
//!
//! A [`ValidatorBuilder`] collects independent predicates (length bounds,
//! character classes, no repeated characters, anything custom). Building it
//! yields an immutable [`Validator`] that accepts a string only when every
//! predicate holds.
//!
//! ## Quick Example
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
//! assert!(!validator.validate("$abcdef1")); // no uppercase
//! assert!(!validator.validate(None));
//! ```
//!
//! ## Rules must be pure
//!
//! Rules may run in any order and `validate` stops at the first failure, so
//! a custom predicate must not have side effects or depend on other rules.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when validators are built and inputs
//!   are rejected.
//! - `serde`: `Deserialize` for [`PasswordPolicy`], `Serialize` for
//!   [`Violation`] and [`RuleKind`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod builder;
mod policy;
pub mod predicate;
mod rule;
pub mod testing;
pub mod validation;
mod validator;
mod violation;

// Re-exports
pub use builder::ValidatorBuilder;
pub use policy::{PasswordPolicy, SpecialCharPolicy};
pub use predicate::DEFAULT_SPECIAL_CHARACTERS;
pub use rule::RuleKind;
pub use validation::Validation;
pub use validator::Validator;
pub use violation::Violation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::policy::{PasswordPolicy, SpecialCharPolicy};
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::rule::RuleKind;
    pub use crate::validation::Validation;
    pub use crate::validator::Validator;
    pub use crate::violation::Violation;
}
