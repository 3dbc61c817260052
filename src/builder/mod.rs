//! Builder API for classifiers with custom character sets.
//!
//! The standard sets need no configuration. A builder is for callers that
//! supply their own digits, capital letters or special characters; the sets
//! are checked for consistency before a classifier is handed out.

pub mod error;
pub mod macros;

pub use error::ConfigError;

use crate::charset::{CharSet, CharacterSets};
use crate::classifier::Classifier;
use stillwater::validation::Validation;
use tracing::{debug, warn};

/// Builder for constructing classifiers with a fluent API.
///
/// Every set starts at its standard value.
///
/// # Example
///
/// ```
/// use lexis::builder::ClassifierBuilder;
/// use lexis::Grammar;
///
/// let classifier = ClassifierBuilder::new()
///     .special_characters("?-")
///     .build()
///     .unwrap();
///
/// assert!(classifier.is_valid(Grammar::Password, "A?aaaaaa"));
/// assert!(!classifier.is_valid(Grammar::Password, "A!aaaaaa"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClassifierBuilder {
    sets: CharacterSets,
}

impl ClassifierBuilder {
    /// Create a new builder holding the standard sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all four sets at once.
    pub fn sets(mut self, sets: CharacterSets) -> Self {
        self.sets = sets;
        self
    }

    pub fn digits(mut self, members: impl Into<CharSet>) -> Self {
        self.sets.digits = members.into();
        self
    }

    pub fn non_zero_digits(mut self, members: impl Into<CharSet>) -> Self {
        self.sets.non_zero_digits = members.into();
        self
    }

    pub fn capital_letters(mut self, members: impl Into<CharSet>) -> Self {
        self.sets.capital_letters = members.into();
        self
    }

    pub fn special_characters(mut self, members: impl Into<CharSet>) -> Self {
        self.sets.special_characters = members.into();
        self
    }

    /// Build the classifier.
    /// Returns every consistency violation if the sets cannot be used.
    pub fn build(self) -> Result<Classifier, ConfigError> {
        match self.sets.validate() {
            Validation::Success(_) => {
                debug!(
                    special_characters = %self.sets.special_characters,
                    "built classifier"
                );
                Ok(Classifier::new(self.sets))
            }
            Validation::Failure(errors) => {
                let violations: Vec<_> = errors.iter().cloned().collect();
                warn!(count = violations.len(), "rejected character sets");
                Err(ConfigError::Invalid(violations))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::SetViolation;
    use crate::Grammar;

    #[test]
    fn default_builder_uses_standard_sets() {
        let classifier = ClassifierBuilder::new().build().unwrap();
        assert_eq!(classifier.sets(), CharacterSets::standard());
    }

    #[test]
    fn builder_replaces_individual_sets() {
        let classifier = ClassifierBuilder::new()
            .digits("01")
            .non_zero_digits("1")
            .build()
            .unwrap();

        assert!(classifier.is_valid(Grammar::Integer, "10"));
        assert!(!classifier.is_valid(Grammar::Integer, "12"));
    }

    #[test]
    fn builder_accepts_full_set_replacement() {
        let sets = CharacterSets {
            capital_letters: CharSet::new("XYZ"),
            ..CharacterSets::default()
        };

        let classifier = ClassifierBuilder::new().sets(sets).build().unwrap();

        assert!(classifier.is_valid(Grammar::Password, "X!aaaaaa"));
        assert!(!classifier.is_valid(Grammar::Password, "A!aaaaaa"));
    }

    #[test]
    fn builder_rejects_inconsistent_sets() {
        let result = ClassifierBuilder::new()
            .capital_letters("AB")
            .special_characters("B")
            .non_zero_digits("0")
            .build();

        match result {
            Err(ConfigError::Invalid(violations)) => {
                assert!(violations.contains(&SetViolation::Overlap { ch: 'B' }));
                assert!(violations.contains(&SetViolation::ZeroIsNonZero));
            }
            other => panic!("expected invalid sets, got {other:?}"),
        }
    }

    #[test]
    fn builder_rejects_empty_sets() {
        let result = ClassifierBuilder::new().special_characters("").build();

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
