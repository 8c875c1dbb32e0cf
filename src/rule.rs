//! Rule sets
//!
//! A rule pairs a predicate with a [`RuleKind`] describing it. The kind is
//! what diagnostics report; the predicate is what runs.

use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use crate::predicate::{HasDigit, HasLowercase, HasUppercase, NoRepeatedChars, Predicate};

/// What a rule checks.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "rule", rename_all = "snake_case"))]
pub enum RuleKind {
    /// At least `min` characters.
    MinLength {
        /// Inclusive lower bound.
        min: usize,
    },
    /// At most `max` characters.
    MaxLength {
        /// Inclusive upper bound.
        max: usize,
    },
    /// At least one character from `chars`.
    SpecialChar {
        /// Accepted characters.
        chars: String,
    },
    /// At least one ASCII uppercase letter.
    UpperCase,
    /// At least one ASCII lowercase letter.
    LowerCase,
    /// At least one ASCII digit.
    Digit,
    /// No character appears twice.
    NoRepeatedChars,
    /// A caller-supplied predicate.
    Custom {
        /// Optional label given at registration.
        name: Option<String>,
    },
}

impl RuleKind {
    /// The kind of a default predicate type, so that `HAS_DIGIT` given as a
    /// custom predicate is the same rule as `with_digit()`.
    pub(crate) fn of_default<P: 'static>() -> Option<RuleKind> {
        let id = TypeId::of::<P>();
        if id == TypeId::of::<HasUppercase>() {
            Some(RuleKind::UpperCase)
        } else if id == TypeId::of::<HasLowercase>() {
            Some(RuleKind::LowerCase)
        } else if id == TypeId::of::<HasDigit>() {
            Some(RuleKind::Digit)
        } else if id == TypeId::of::<NoRepeatedChars>() {
            Some(RuleKind::NoRepeatedChars)
        } else {
            None
        }
    }

    /// Kinds backed by one shared predicate value. Registering one of these
    /// twice is registering the same predicate twice.
    fn is_shared_default(&self) -> bool {
        matches!(
            self,
            RuleKind::UpperCase | RuleKind::LowerCase | RuleKind::Digit | RuleKind::NoRepeatedChars
        )
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::MinLength { min } => write!(f, "must be at least {} characters long", min),
            RuleKind::MaxLength { max } => write!(f, "must be at most {} characters long", max),
            RuleKind::SpecialChar { chars } => {
                write!(f, "must contain one of the characters {:?}", chars)
            }
            RuleKind::UpperCase => write!(f, "must contain an uppercase letter"),
            RuleKind::LowerCase => write!(f, "must contain a lowercase letter"),
            RuleKind::Digit => write!(f, "must contain a digit"),
            RuleKind::NoRepeatedChars => write!(f, "must not repeat any character"),
            RuleKind::Custom { name: Some(name) } => write!(f, "must satisfy rule '{}'", name),
            RuleKind::Custom { name: None } => write!(f, "must satisfy a custom rule"),
        }
    }
}

/// A predicate together with its description.
#[derive(Clone)]
pub(crate) struct Rule {
    kind: RuleKind,
    predicate: Arc<dyn Predicate<str>>,
}

impl Rule {
    pub(crate) fn new(kind: RuleKind, predicate: impl Predicate<str> + 'static) -> Self {
        Self::shared(kind, Arc::new(predicate))
    }

    pub(crate) fn shared(kind: RuleKind, predicate: Arc<dyn Predicate<str>>) -> Self {
        Rule { kind, predicate }
    }

    pub(crate) fn kind(&self) -> &RuleKind {
        &self.kind
    }

    #[inline]
    pub(crate) fn check(&self, input: &str) -> bool {
        self.predicate.check(input)
    }

    /// Identity, not behavior: two separately built min-length rules are
    /// different rules even when their bounds match.
    fn is_same(&self, other: &Rule) -> bool {
        Arc::ptr_eq(&self.predicate, &other.predicate)
            || (self.kind.is_shared_default() && self.kind == other.kind)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("kind", &self.kind).finish()
    }
}

/// An insertion-ordered collection of rules, unique by identity.
#[derive(Clone, Debug, Default)]
pub(crate) struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Add a rule unless the very same rule is already present.
    /// Returns whether the set grew.
    pub(crate) fn insert(&mut self, rule: Rule) -> bool {
        if self.rules.iter().any(|existing| existing.is_same(&rule)) {
            return false;
        }
        self.rules.push(rule);
        true
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.rules.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Set equality by rule identity; insertion order is ignored.
    pub(crate) fn same_rules(&self, other: &RuleSet) -> bool {
        self.len() == other.len()
            && self
                .rules
                .iter()
                .all(|rule| other.rules.iter().any(|theirs| rule.is_same(theirs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{min_length, HAS_DIGIT};

    #[test]
    fn test_shared_defaults_collapse() {
        let mut set = RuleSet::default();
        assert!(set.insert(Rule::new(RuleKind::Digit, HAS_DIGIT)));
        assert!(!set.insert(Rule::new(RuleKind::Digit, HAS_DIGIT)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_equal_behavior_is_not_deduplicated() {
        let mut set = RuleSet::default();
        assert!(set.insert(Rule::new(RuleKind::MinLength { min: 8 }, min_length(8))));
        assert!(set.insert(Rule::new(RuleKind::MinLength { min: 8 }, min_length(8))));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_same_arc_collapses() {
        let shared: Arc<dyn Predicate<str>> = Arc::new(|s: &str| s.contains('L'));
        let mut set = RuleSet::default();
        let kind = RuleKind::Custom { name: None };
        assert!(set.insert(Rule::shared(kind.clone(), Arc::clone(&shared))));
        assert!(!set.insert(Rule::shared(kind.clone(), Arc::clone(&shared))));
        assert!(set.insert(Rule::new(kind, |s: &str| s.contains('L'))));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_same_rules_ignores_order() {
        let digit = Rule::new(RuleKind::Digit, HAS_DIGIT);
        let min = Rule::new(RuleKind::MinLength { min: 8 }, min_length(8));

        let mut a = RuleSet::default();
        a.insert(digit.clone());
        a.insert(min.clone());
        let mut b = RuleSet::default();
        b.insert(min);
        b.insert(digit);
        assert!(a.same_rules(&b));

        let mut c = RuleSet::default();
        c.insert(Rule::new(RuleKind::Digit, HAS_DIGIT));
        c.insert(Rule::new(RuleKind::MinLength { min: 8 }, min_length(8)));
        assert!(!a.same_rules(&c));
    }

    #[test]
    fn test_of_default() {
        assert_eq!(RuleKind::of_default::<HasDigit>(), Some(RuleKind::Digit));
        assert_eq!(
            RuleKind::of_default::<NoRepeatedChars>(),
            Some(RuleKind::NoRepeatedChars)
        );
        assert_eq!(RuleKind::of_default::<fn(&str) -> bool>(), None);
    }

    #[test]
    fn test_rule_check_delegates() {
        let rule = Rule::new(RuleKind::Digit, HAS_DIGIT);
        assert!(rule.check("a1"));
        assert!(!rule.check("a"));
        assert_eq!(rule.kind(), &RuleKind::Digit);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(
            RuleKind::MinLength { min: 8 }.to_string(),
            "must be at least 8 characters long"
        );
        assert_eq!(
            RuleKind::Custom {
                name: Some("no spaces".into())
            }
            .to_string(),
            "must satisfy rule 'no spaces'"
        );
        assert_eq!(
            RuleKind::SpecialChar { chars: "!?".into() }.to_string(),
            "must contain one of the characters \"!?\""
        );
    }
}
