//! Positive decimal integers without a leading zero.

use crate::charset::CharacterSets;
use crate::core::{Acceptance, Automaton};
use crate::detector::Detector;
use crate::state_enum;
use once_cell::sync::Lazy;

static DETECTOR: Lazy<Detector<IntegerState>> = Lazy::new(detector);

state_enum! {
    pub enum IntegerState {
        FirstInteger,
        Valid,
        Invalid,
    }
    accepting: [Valid]
    invalid: [Invalid]
}

impl Automaton for IntegerState {
    const INITIAL: Self = Self::FirstInteger;

    fn next(self, c: char, sets: &CharacterSets) -> Self {
        match self {
            Self::FirstInteger if sets.non_zero_digits.contains(c) => Self::Valid,
            Self::Valid if sets.digits.contains(c) => Self::Valid,
            Self::FirstInteger | Self::Valid | Self::Invalid => Self::Invalid,
        }
    }
}

pub fn detector() -> Detector<IntegerState> {
    Detector::new("integer", Acceptance::terminal())
}

/// Check whether `input` is a positive integer with no leading zero.
///
/// ```rust
/// use lexis::grammar::integer;
///
/// assert!(integer::is_valid("1000"));
/// assert!(!integer::is_valid("0"));
/// assert!(!integer::is_valid("042"));
/// ```
pub fn is_valid(input: &str) -> bool {
    DETECTOR.is_valid(input)
}

/// Like [`is_valid`], but against custom character sets.
pub fn is_valid_with(input: &str, sets: &CharacterSets) -> bool {
    DETECTOR.is_valid_with(input, sets)
}
