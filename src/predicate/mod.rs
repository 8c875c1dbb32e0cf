//! Predicates and predicate combinators
//!
//! A predicate is a pure boolean rule. This module holds the [`Predicate`]
//! trait, logical combinators for composing rules, and the built-in string
//! rules the builder's convenience methods use. The named defaults are
//! exported so callers can compose rule sets without the builder.
//!
//! # Example
//!
//! ```rust
//! use passrules::predicate::*;
//!
//! let letters = PredicateExt::<str>::and(HAS_UPPERCASE, HAS_LOWERCASE);
//! assert!(letters.check("Hello"));
//! assert!(!letters.check("hello"));
//!
//! assert!(NO_REPEATED_CHARS.check("abc"));
//! assert!(!NO_REPEATED_CHARS.check("abca"));
//! ```

mod combinators;
mod string;

// Re-export core trait
pub use combinators::{And, Not, Or, Predicate, PredicateExt};

// Re-export string predicates
pub use string::{
    max_length, min_length, special_chars, HasDigit, HasLowercase, HasUppercase, MaxLength,
    MinLength, NoRepeatedChars, SpecialChars, DEFAULT_SPECIAL_CHARACTERS, HAS_DIGIT,
    HAS_LOWERCASE, HAS_UPPERCASE, NO_REPEATED_CHARS,
};
