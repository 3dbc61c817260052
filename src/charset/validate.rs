//! Consistency checks for custom character sets.
//!
//! Uses Stillwater's `Validation` so every problem with a configuration is
//! reported at once instead of stopping at the first.

use super::{CharSet, CharacterSets};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A reason a set of classification sets cannot drive the grammars.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SetViolation {
    #[error("Character set '{set}' is empty")]
    Empty { set: &'static str },

    #[error("'0' is listed as a non-zero digit")]
    ZeroIsNonZero,

    #[error("Non-zero digit '{ch}' is missing from the digit set")]
    NotADigit { ch: char },

    #[error("Character '{ch}' is both a capital letter and a special character")]
    Overlap { ch: char },
}

type Check = Validation<(), NonEmptyVec<SetViolation>>;

fn require(holds: bool, violation: SetViolation) -> Check {
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

fn non_empty(set: &'static str, chars: &CharSet) -> Check {
    require(!chars.is_empty(), SetViolation::Empty { set })
}

impl CharacterSets {
    /// Check the sets for consistency, accumulating ALL violations.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lexis::charset::{CharSet, SetViolation};
    /// use lexis::CharacterSets;
    /// use stillwater::validation::Validation;
    ///
    /// assert!(CharacterSets::standard().validate().is_success());
    ///
    /// let broken = CharacterSets {
    ///     non_zero_digits: CharSet::new("0123456789"),
    ///     special_characters: CharSet::new(""),
    ///     ..CharacterSets::default()
    /// };
    ///
    /// match broken.validate() {
    ///     Validation::Failure(errors) => {
    ///         assert!(errors.iter().any(|e| matches!(e, SetViolation::ZeroIsNonZero)));
    ///         assert!(errors.iter().any(|e| matches!(e, SetViolation::Empty { .. })));
    ///     }
    ///     Validation::Success(_) => panic!("expected violations"),
    /// }
    /// ```
    pub fn validate(&self) -> Validation<(), NonEmptyVec<SetViolation>> {
        let mut checks: Vec<Check> = vec![
            non_empty("digits", &self.digits),
            non_empty("non_zero_digits", &self.non_zero_digits),
            non_empty("capital_letters", &self.capital_letters),
            non_empty("special_characters", &self.special_characters),
            require(
                !self.non_zero_digits.contains('0'),
                SetViolation::ZeroIsNonZero,
            ),
        ];

        for ch in self.non_zero_digits.iter() {
            checks.push(require(
                self.digits.contains(ch),
                SetViolation::NotADigit { ch },
            ));
        }

        for ch in self.capital_letters.iter() {
            checks.push(require(
                !self.special_characters.contains(ch),
                SetViolation::Overlap { ch },
            ));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
