//! Core predicate trait and logical combinators
//!
//! Every rule a [`Validator`](crate::Validator) enforces is a [`Predicate`].
//! Predicates are pure: the outcome of `check` depends only on the value,
//! never on other rules or on the order in which rules run.

/// A pure boolean rule over values of type `T`.
///
/// Closures of the shape `Fn(&T) -> bool` are predicates automatically, so
/// custom rules rarely need a named type.
///
/// # Example
///
/// ```rust
/// use passrules::predicate::*;
///
/// let has_l = |s: &str| s.contains('L');
/// assert!(has_l.check("Linux"));
/// assert!(!has_l.check("windows"));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// # Example
///
/// ```rust
/// use passrules::predicate::*;
///
/// // a digit or one of the default special characters
/// let p = PredicateExt::<str>::or(HAS_DIGIT, special_chars(None));
/// assert!(p.check("abc1"));
/// assert!(p.check("abc!"));
/// assert!(!p.check("abc"));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// True only when both predicates hold.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// True when either predicate holds.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// ```rust
    /// use passrules::predicate::*;
    ///
    /// let no_spaces = PredicateExt::<str>::not(|s: &str| s.contains(' '));
    /// assert!(no_spaces.check("hunter2"));
    /// assert!(!no_spaces.check("hunter 2"));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}
