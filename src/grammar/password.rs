//! Complex passwords.
//!
//! A password needs at least one capital letter, at least one special
//! character and [`MIN_PASSWORD_LENGTH`] characters, and must not end with a
//! special character.
//!
//! The automaton tracks which character classes have been seen. Length and
//! the trailing character are checked against the original input once the
//! fold is complete, so there is no invalid sink in this grammar.

use crate::charset::{CharSet, CharacterSets};
use crate::core::{Acceptance, Automaton};
use crate::detector::Detector;
use crate::state_enum;
use once_cell::sync::Lazy;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

static DETECTOR: Lazy<Detector<PasswordState>> = Lazy::new(detector);

state_enum! {
    /// Which required character classes have been seen so far.
    pub enum PasswordState {
        /// Neither a capital letter nor a special character yet.
        AwaitingCharacter,
        HasCapital,
        HasSpecialCharacter,
        /// Both classes seen.
        HasSpecialAndCapital,
        /// Both classes seen and the last character was special.
        LookingForNormalCharacter,
    }
    accepting: [HasSpecialAndCapital]
}

impl Automaton for PasswordState {
    const INITIAL: Self = Self::AwaitingCharacter;

    fn next(self, c: char, sets: &CharacterSets) -> Self {
        let capital = sets.capital_letters.contains(c);
        let special = sets.special_characters.contains(c);

        match self {
            Self::AwaitingCharacter if capital => Self::HasCapital,
            Self::AwaitingCharacter if special => Self::HasSpecialCharacter,
            Self::AwaitingCharacter => Self::AwaitingCharacter,

            Self::HasCapital if special => Self::HasSpecialAndCapital,
            Self::HasCapital => Self::HasCapital,

            Self::HasSpecialCharacter if capital => Self::HasSpecialAndCapital,
            Self::HasSpecialCharacter => Self::HasSpecialCharacter,

            Self::HasSpecialAndCapital | Self::LookingForNormalCharacter if special => {
                Self::LookingForNormalCharacter
            }
            Self::HasSpecialAndCapital | Self::LookingForNormalCharacter => {
                Self::HasSpecialAndCapital
            }
        }
    }
}

/// A requirement a password fails to meet.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PasswordViolation {
    #[error("Password has no capital letter")]
    MissingCapital,

    #[error("Password has no special character")]
    MissingSpecial,

    #[error("Password is {length} characters long, minimum is {minimum}")]
    TooShort { length: usize, minimum: usize },

    #[error("Password ends with special character '{ch}'")]
    TrailingSpecial { ch: char },
}

fn long_enough(input: &str) -> bool {
    input.chars().count() >= MIN_PASSWORD_LENGTH
}

fn ends_with_special(input: &str, sets: &CharacterSets) -> bool {
    input
        .chars()
        .last()
        .is_some_and(|c| sets.special_characters.contains(c))
}

/// Detector for complex passwords.
///
/// Accepts when the terminal state is `HasSpecialAndCapital`, the input is at
/// least [`MIN_PASSWORD_LENGTH`] characters long and its last character is not
/// special. The trailing check is needed even with the
/// `LookingForNormalCharacter` state: when the special character that
/// completes both classes is the last one, the fold ends in
/// `HasSpecialAndCapital`.
pub fn detector() -> Detector<PasswordState> {
    Detector::new(
        "password",
        Acceptance::new(|state: &PasswordState, input: &str, sets: &CharacterSets| {
            matches!(state, PasswordState::HasSpecialAndCapital)
                && long_enough(input)
                && !ends_with_special(input, sets)
        }),
    )
}

/// Check whether `input` is a complex password.
///
/// ```rust
/// use lexis::grammar::password;
///
/// assert!(password::is_valid("A!aaaaaa"));
/// assert!(!password::is_valid("Aaaaaaaa!"));
/// assert!(!password::is_valid("A!aaaaa"));
/// ```
pub fn is_valid(input: &str) -> bool {
    DETECTOR.is_valid(input)
}

/// Like [`is_valid`], but against custom character sets.
pub fn is_valid_with(input: &str, sets: &CharacterSets) -> bool {
    DETECTOR.is_valid_with(input, sets)
}

/// Report every requirement `input` fails, not just the first.
///
/// Succeeds exactly when the detector accepts `input` with the same sets.
///
/// # Example
///
/// ```rust
/// use lexis::grammar::password::{self, PasswordViolation};
/// use lexis::CharacterSets;
/// use stillwater::validation::Validation;
///
/// match password::check("abc!", CharacterSets::standard()) {
///     Validation::Failure(errors) => {
///         assert!(errors.iter().any(|e| matches!(e, PasswordViolation::MissingCapital)));
///         assert!(errors.iter().any(|e| matches!(e, PasswordViolation::TooShort { .. })));
///         assert!(errors.iter().any(|e| matches!(e, PasswordViolation::TrailingSpecial { .. })));
///     }
///     Validation::Success(_) => panic!("expected violations"),
/// }
/// ```
pub fn check(
    input: &str,
    sets: &CharacterSets,
) -> Validation<(), NonEmptyVec<PasswordViolation>> {
    let has = |set: &CharSet| input.chars().any(|c| set.contains(c));

    let checks: Vec<Validation<(), NonEmptyVec<PasswordViolation>>> = vec![
        require(has(&sets.capital_letters), PasswordViolation::MissingCapital),
        require(has(&sets.special_characters), PasswordViolation::MissingSpecial),
        require(
            long_enough(input),
            PasswordViolation::TooShort {
                length: input.chars().count(),
                minimum: MIN_PASSWORD_LENGTH,
            },
        ),
        match input.chars().last() {
            Some(ch) if sets.special_characters.contains(ch) => {
                Validation::fail(PasswordViolation::TrailingSpecial { ch })
            }
            _ => Validation::success(()),
        },
    ];

    Validation::all_vec(checks).map(|_| ())
}

fn require(
    holds: bool,
    violation: PasswordViolation,
) -> Validation<(), NonEmptyVec<PasswordViolation>> {
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}
