//! Character classification sets consumed by transition tables.
//!
//! Sets are immutable once built. The standard sets are constructed once per
//! process and shared by reference; custom sets can be supplied through
//! [`ClassifierBuilder`](crate::builder::ClassifierBuilder) or JSON.

mod validate;

pub use validate::SetViolation;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Decimal digits.
pub const DIGITS: &str = "0123456789";

/// Decimal digits other than zero.
pub const NON_ZERO_DIGITS: &str = "123456789";

/// ASCII capital letters.
pub const CAPITAL_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Punctuation accepted as a password special character.
pub const SPECIAL_CHARACTERS: &str = "!@#$%&*";

static STANDARD: Lazy<CharacterSets> = Lazy::new(CharacterSets::default);

/// An immutable set of characters.
///
/// Membership is the only question transition tables ask. Serializes as a
/// plain string holding every member once, in order.
///
/// # Example
///
/// ```rust
/// use lexis::charset::CharSet;
///
/// let vowels = CharSet::new("aeiou");
/// assert!(vowels.contains('e'));
/// assert!(!vowels.contains('x'));
/// assert_eq!(vowels.len(), 5);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CharSet {
    members: BTreeSet<char>,
}

impl CharSet {
    /// Build a set from every character of `members`. Duplicates collapse.
    pub fn new(members: &str) -> Self {
        members.chars().collect()
    }

    pub fn contains(&self, c: char) -> bool {
        self.members.contains(&c)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.members.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl From<&str> for CharSet {
    fn from(members: &str) -> Self {
        Self::new(members)
    }
}

impl From<String> for CharSet {
    fn from(members: String) -> Self {
        Self::new(&members)
    }
}

impl From<CharSet> for String {
    fn from(set: CharSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Display for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// The four classification sets every grammar draws from.
///
/// Fields missing from a JSON document fall back to the standard sets.
///
/// # Example
///
/// ```rust
/// use lexis::CharacterSets;
///
/// let sets = CharacterSets::standard();
/// assert!(sets.digits.contains('0'));
/// assert!(!sets.non_zero_digits.contains('0'));
/// assert!(sets.capital_letters.contains('Q'));
/// assert!(sets.special_characters.contains('!'));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CharacterSets {
    pub digits: CharSet,
    pub non_zero_digits: CharSet,
    pub capital_letters: CharSet,
    pub special_characters: CharSet,
}

impl CharacterSets {
    /// The process-wide standard sets, built on first use.
    pub fn standard() -> &'static CharacterSets {
        &STANDARD
    }
}

impl Default for CharacterSets {
    fn default() -> Self {
        Self {
            digits: CharSet::new(DIGITS),
            non_zero_digits: CharSet::new(NON_ZERO_DIGITS),
            capital_letters: CharSet::new(CAPITAL_LETTERS),
            special_characters: CharSet::new(SPECIAL_CHARACTERS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_sets_match_constants() {
        let sets = CharacterSets::standard();
        assert_eq!(sets.digits.len(), 10);
        assert_eq!(sets.non_zero_digits.len(), 9);
        assert_eq!(sets.capital_letters.len(), 26);
        assert_eq!(sets.special_characters.to_string(), "!#$%&*@");
    }

    #[test]
    fn standard_is_shared() {
        let first = CharacterSets::standard();
        let second = CharacterSets::standard();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn charset_collapses_duplicates() {
        let set = CharSet::new("aabbc");
        assert_eq!(set.len(), 3);
        assert_eq!(set.to_string(), "abc");
    }

    #[test]
    fn charset_membership_is_literal() {
        let set = CharSet::new("A");
        assert!(set.contains('A'));
        assert!(!set.contains('a'));
        assert!(!set.contains('Á'));
    }

    #[test]
    fn empty_charset_contains_nothing() {
        let set = CharSet::default();
        assert!(set.is_empty());
        assert!(!set.contains(' '));
    }

    #[test]
    fn charset_serializes_as_string() {
        let set = CharSet::new("*!");
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "\"!*\"");

        let deserialized: CharSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, deserialized);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let sets: CharacterSets =
            serde_json::from_str(r#"{"special_characters": "?-"}"#).unwrap();

        assert_eq!(sets.digits, CharSet::new(DIGITS));
        assert_eq!(sets.capital_letters, CharSet::new(CAPITAL_LETTERS));
        assert!(sets.special_characters.contains('?'));
        assert!(!sets.special_characters.contains('!'));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_str::<CharacterSets>(r#"{"lowercase": "abc"}"#);
        assert!(result.is_err());
    }
}
