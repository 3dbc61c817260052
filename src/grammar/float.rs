//! Floating-point literals: `D+.D+`, `0.D+` and `.D+`.
//!
//! A fractional digit is mandatory, at most one point is allowed, and a
//! leading zero must be followed immediately by the point.

use crate::charset::CharacterSets;
use crate::core::{Acceptance, Automaton};
use crate::detector::Detector;
use crate::state_enum;
use once_cell::sync::Lazy;

const POINT: char = '.';
const ZERO: char = '0';

static DETECTOR: Lazy<Detector<FloatState>> = Lazy::new(detector);

state_enum! {
    /// Position in a floating-point literal.
    pub enum FloatState {
        FirstValue,
        /// A leading `0` was consumed; only the point may follow.
        ZeroFirst,
        /// Integer part with a non-zero first digit.
        HasDigits,
        /// The point was consumed and no fractional digit yet.
        HasPeriod,
        /// At least one fractional digit.
        Valid,
        Invalid,
    }
    accepting: [Valid]
    invalid: [Invalid]
}

impl Automaton for FloatState {
    const INITIAL: Self = Self::FirstValue;

    fn next(self, c: char, sets: &CharacterSets) -> Self {
        match self {
            Self::FirstValue => match c {
                ZERO => Self::ZeroFirst,
                POINT => Self::HasPeriod,
                c if sets.non_zero_digits.contains(c) => Self::HasDigits,
                _ => Self::Invalid,
            },
            Self::ZeroFirst => match c {
                POINT => Self::HasPeriod,
                _ => Self::Invalid,
            },
            Self::HasDigits => match c {
                POINT => Self::HasPeriod,
                c if sets.digits.contains(c) => Self::HasDigits,
                _ => Self::Invalid,
            },
            Self::HasPeriod | Self::Valid if sets.digits.contains(c) => Self::Valid,
            Self::HasPeriod | Self::Valid | Self::Invalid => Self::Invalid,
        }
    }
}

pub fn detector() -> Detector<FloatState> {
    Detector::new("float", Acceptance::terminal())
}

/// Check whether `input` is a floating-point literal.
///
/// ```rust
/// use lexis::grammar::float;
///
/// assert!(float::is_valid("1.0"));
/// assert!(float::is_valid(".123"));
/// assert!(!float::is_valid("123."));
/// ```
pub fn is_valid(input: &str) -> bool {
    DETECTOR.is_valid(input)
}

/// Like [`is_valid`], but against custom character sets.
pub fn is_valid_with(input: &str, sets: &CharacterSets) -> bool {
    DETECTOR.is_valid_with(input, sets)
}
