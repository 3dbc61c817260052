//! Simplified email shape: `<part1>@<part2>.<part3>`.
//!
//! Exactly one `@`, exactly one `.` after it, every part non-empty and no
//! spaces anywhere. Part 1 may contain periods; no other character
//! restrictions apply.

use crate::charset::CharacterSets;
use crate::core::{Acceptance, Automaton};
use crate::detector::Detector;
use crate::state_enum;
use once_cell::sync::Lazy;

const AT: char = '@';
const PERIOD: char = '.';
const SPACE: char = ' ';

static DETECTOR: Lazy<Detector<EmailState>> = Lazy::new(detector);

state_enum! {
    /// Position in an email address.
    pub enum EmailState {
        AwaitingFirstCharacter,
        /// Inside part 1.
        LookingForAt,
        /// The `@` was consumed; part 2 is still empty.
        HasAt,
        /// Inside part 2.
        LookingForPeriod,
        /// The `.` was consumed; part 3 is still empty.
        HasPeriod,
        /// Inside part 3, at least one character consumed.
        ValidEmail,
        Invalid,
    }
    accepting: [ValidEmail]
    invalid: [Invalid]
}

impl Automaton for EmailState {
    const INITIAL: Self = Self::AwaitingFirstCharacter;

    fn next(self, c: char, _sets: &CharacterSets) -> Self {
        match (self, c) {
            (Self::Invalid, _) => Self::Invalid,

            (Self::AwaitingFirstCharacter, SPACE | AT) => Self::Invalid,
            (Self::AwaitingFirstCharacter, _) => Self::LookingForAt,

            (Self::LookingForAt, SPACE) => Self::Invalid,
            (Self::LookingForAt, AT) => Self::HasAt,
            (Self::LookingForAt, _) => Self::LookingForAt,

            (Self::HasAt, SPACE | PERIOD | AT) => Self::Invalid,
            (Self::HasAt, _) => Self::LookingForPeriod,

            (Self::LookingForPeriod, SPACE | AT) => Self::Invalid,
            (Self::LookingForPeriod, PERIOD) => Self::HasPeriod,
            (Self::LookingForPeriod, _) => Self::LookingForPeriod,

            (Self::HasPeriod, SPACE | PERIOD | AT) => Self::Invalid,
            (Self::HasPeriod, _) => Self::ValidEmail,

            (Self::ValidEmail, SPACE | PERIOD | AT) => Self::Invalid,
            (Self::ValidEmail, _) => Self::ValidEmail,
        }
    }
}

pub fn detector() -> Detector<EmailState> {
    Detector::new("email", Acceptance::terminal())
}

/// Check whether `input` has the shape `part1@part2.part3`.
///
/// ```rust
/// use lexis::grammar::email;
///
/// assert!(email::is_valid("joseph.ditton@usu.edu"));
/// assert!(!email::is_valid("a@b@c.com"));
/// ```
pub fn is_valid(input: &str) -> bool {
    DETECTOR.is_valid(input)
}

/// Like [`is_valid`], but against custom character sets.
pub fn is_valid_with(input: &str, sets: &CharacterSets) -> bool {
    DETECTOR.is_valid_with(input, sets)
}
