//! String predicates
//!
//! Built-in rules for password-like strings. Lengths are counted in Unicode
//! scalar values; the letter and digit classes are ASCII only.

use std::collections::HashSet;

use super::combinators::Predicate;

/// Special characters required by
/// [`with_special_char(None)`](crate::ValidatorBuilder::with_special_char).
pub const DEFAULT_SPECIAL_CHARACTERS: &str = "!@#$%^&*()-+";

/// At least one ASCII uppercase letter (`A-Z`).
pub const HAS_UPPERCASE: HasUppercase = HasUppercase;

/// At least one ASCII lowercase letter (`a-z`).
pub const HAS_LOWERCASE: HasLowercase = HasLowercase;

/// At least one ASCII digit (`0-9`).
pub const HAS_DIGIT: HasDigit = HasDigit;

/// No character occurs more than once, adjacent or not.
pub const NO_REPEATED_CHARS: NoRepeatedChars = NoRepeatedChars;

/// Predicate that checks for an uppercase letter.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct HasUppercase;

impl Predicate<str> for HasUppercase {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().any(|c| c.is_ascii_uppercase())
    }
}

impl Predicate<String> for HasUppercase {
    #[inline]
    fn check(&self, value: &String) -> bool {
        value.chars().any(|c| c.is_ascii_uppercase())
    }
}

/// Predicate that checks for a lowercase letter.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct HasLowercase;

impl Predicate<str> for HasLowercase {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().any(|c| c.is_ascii_lowercase())
    }
}

impl Predicate<String> for HasLowercase {
    #[inline]
    fn check(&self, value: &String) -> bool {
        value.chars().any(|c| c.is_ascii_lowercase())
    }
}

/// Predicate that checks for a digit.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct HasDigit;

impl Predicate<str> for HasDigit {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().any(|c| c.is_ascii_digit())
    }
}

impl Predicate<String> for HasDigit {
    #[inline]
    fn check(&self, value: &String) -> bool {
        value.chars().any(|c| c.is_ascii_digit())
    }
}

/// Predicate that rejects any string in which some character appears twice.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct NoRepeatedChars;

impl Predicate<str> for NoRepeatedChars {
    #[inline]
    fn check(&self, value: &str) -> bool {
        let mut seen = HashSet::with_capacity(value.len());
        value.chars().all(|c| seen.insert(c))
    }
}

impl Predicate<String> for NoRepeatedChars {
    #[inline]
    fn check(&self, value: &String) -> bool {
        Predicate::<str>::check(self, value.as_str())
    }
}

/// Predicate that checks the string is at least `min` characters long.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinLength {
    min: usize,
}

impl MinLength {
    /// The configured lower bound.
    pub fn min(&self) -> usize {
        self.min
    }
}

impl Predicate<str> for MinLength {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().count() >= self.min
    }
}

impl Predicate<String> for MinLength {
    #[inline]
    fn check(&self, value: &String) -> bool {
        value.chars().count() >= self.min
    }
}

/// Create a predicate that checks the string has at least `min` characters.
///
/// # Example
///
/// ```rust
/// use passrules::predicate::*;
///
/// assert!(min_length(3).check("abc"));
/// assert!(!min_length(3).check("ab"));
/// // counted in characters, not bytes
/// assert!(min_length(3).check("äöü"));
/// ```
pub fn min_length(min: usize) -> MinLength {
    MinLength { min }
}

/// Predicate that checks the string is at most `max` characters long.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaxLength {
    max: usize,
}

impl MaxLength {
    /// The configured upper bound.
    pub fn max(&self) -> usize {
        self.max
    }
}

impl Predicate<str> for MaxLength {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().count() <= self.max
    }
}

impl Predicate<String> for MaxLength {
    #[inline]
    fn check(&self, value: &String) -> bool {
        value.chars().count() <= self.max
    }
}

/// Create a predicate that checks the string has at most `max` characters.
///
/// # Example
///
/// ```rust
/// use passrules::predicate::*;
///
/// assert!(max_length(5).check("hello"));
/// assert!(!max_length(5).check("toolong"));
/// assert!(max_length(3).check("äöü"));
/// ```
pub fn max_length(max: usize) -> MaxLength {
    MaxLength { max }
}

/// Predicate that requires at least one character from a set.
///
/// The set is literal: `]`, `\`, `^` and `-` are ordinary members, never
/// pattern syntax.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecialChars {
    chars: String,
}

impl SpecialChars {
    /// The accepted characters.
    pub fn chars(&self) -> &str {
        &self.chars
    }
}

impl Predicate<str> for SpecialChars {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().any(|c| self.chars.contains(c))
    }
}

impl Predicate<String> for SpecialChars {
    #[inline]
    fn check(&self, value: &String) -> bool {
        value.chars().any(|c| self.chars.contains(c))
    }
}

/// Create a predicate that requires one of `chars`, or one of
/// [`DEFAULT_SPECIAL_CHARACTERS`] when `chars` is `None`.
///
/// An empty set can never be satisfied.
///
/// # Example
///
/// ```rust
/// use passrules::predicate::*;
///
/// assert!(special_chars(None).check("pa$$"));
/// assert!(!special_chars(None).check("pass"));
///
/// assert!(special_chars("]^").check("a]b"));
/// assert!(!special_chars("]^").check("a$b"));
/// ```
pub fn special_chars<'a>(chars: impl Into<Option<&'a str>>) -> SpecialChars {
    SpecialChars {
        chars: chars
            .into()
            .unwrap_or(DEFAULT_SPECIAL_CHARACTERS)
            .to_string(),
    }
}
