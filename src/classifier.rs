//! Classifier bound to one validated set of character classes.

use crate::builder::{ClassifierBuilder, ConfigError};
use crate::charset::CharacterSets;
use crate::grammar::{password, Grammar, PasswordViolation};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Runs any grammar against a fixed set of character classes.
///
/// Built through [`ClassifierBuilder`] or [`Classifier::from_json`], both of
/// which reject inconsistent sets. Immutable after construction.
///
/// # Example
///
/// ```rust
/// use lexis::{Classifier, Grammar};
///
/// let classifier = Classifier::from_json(r#"{"special_characters": "!?"}"#).unwrap();
///
/// assert!(classifier.is_valid(Grammar::Password, "Pass?word"));
/// assert_eq!(classifier.classify("a@b.c"), vec![Grammar::Email]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Classifier {
    sets: CharacterSets,
}

impl Classifier {
    pub(crate) fn new(sets: CharacterSets) -> Self {
        Self { sets }
    }

    /// Parse a JSON object of sets and validate it.
    ///
    /// Recognized fields are `digits`, `non_zero_digits`, `capital_letters`
    /// and `special_characters`, each a string of members. Missing fields
    /// keep their standard value; unknown fields are an error.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let sets: CharacterSets = serde_json::from_str(json)?;
        ClassifierBuilder::new().sets(sets).build()
    }

    pub fn sets(&self) -> &CharacterSets {
        &self.sets
    }

    pub fn is_valid(&self, grammar: Grammar, input: &str) -> bool {
        grammar.is_valid_with(input, &self.sets)
    }

    /// Every grammar that accepts `input`, in [`Grammar::ALL`] order.
    pub fn classify(&self, input: &str) -> Vec<Grammar> {
        Grammar::ALL
            .into_iter()
            .filter(|grammar| self.is_valid(*grammar, input))
            .collect()
    }

    /// Report every password requirement `input` fails.
    pub fn check_password(&self, input: &str) -> Validation<(), NonEmptyVec<PasswordViolation>> {
        password::check(input, &self.sets)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(CharacterSets::default())
    }
}
