//! Validation type for reporting every failure at once
//!
//! [`Validator::validate`](crate::Validator::validate) answers yes or no and
//! stops at the first failing rule. [`Validator::check`](crate::Validator::check)
//! runs every rule and returns a `Validation`, so a caller can tell a user
//! everything that is wrong with a password in one go.
//!
//! # Example
//!
//! ```rust
//! use passrules::{Validation, Validator, Violation, RuleKind};
//!
//! let validator = Validator::builder().with_min_length(8).with_digit().build();
//!
//! match validator.check("short") {
//!     Validation::Success(_) => unreachable!(),
//!     Validation::Failure(violations) => {
//!         assert_eq!(violations, vec![
//!             Violation::Rule(RuleKind::MinLength { min: 8 }),
//!             Violation::Rule(RuleKind::Digit),
//!         ]);
//!     }
//! }
//! ```

/// A validation result that accumulates errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation.
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation.
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Convert into a `Result`.
    ///
    /// ```rust
    /// use passrules::Validator;
    ///
    /// let validator = Validator::builder().with_digit().build();
    /// assert_eq!(validator.check("abc1").into_result(), Ok("abc1"));
    /// assert!(validator.check("abc").into_result().is_err());
    /// ```
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Borrow the errors of a failure.
    pub fn errors(&self) -> Option<&E> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(error) => Some(error),
        }
    }

    /// Transform the success value.
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the errors.
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }
}
