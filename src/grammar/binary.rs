//! Non-negative binary literals: `1`, `101`, `10011010001`.
//!
//! A valid literal is non-empty, made only of `0` and `1`, and both starts
//! and ends with `1`.

use crate::charset::CharacterSets;
use crate::core::{Acceptance, Automaton};
use crate::detector::Detector;
use crate::state_enum;
use once_cell::sync::Lazy;

static DETECTOR: Lazy<Detector<BinaryState>> = Lazy::new(detector);

state_enum! {
    /// Position in a binary literal.
    pub enum BinaryState {
        /// Nothing consumed yet; only `1` may start the literal.
        AwaitingStart1,
        /// The last character consumed was `1`.
        ValidBinary,
        /// A run of `0`s is open and needs a closing `1`.
        LookingForOne,
        Invalid,
    }
    accepting: [ValidBinary]
    invalid: [Invalid]
}

impl Automaton for BinaryState {
    const INITIAL: Self = Self::AwaitingStart1;

    fn next(self, c: char, _sets: &CharacterSets) -> Self {
        match (self, c) {
            (Self::Invalid, _) => Self::Invalid,
            (Self::AwaitingStart1, '1') => Self::ValidBinary,
            (Self::AwaitingStart1, _) => Self::Invalid,
            (Self::ValidBinary | Self::LookingForOne, '1') => Self::ValidBinary,
            (Self::ValidBinary | Self::LookingForOne, '0') => Self::LookingForOne,
            (Self::ValidBinary | Self::LookingForOne, _) => Self::Invalid,
        }
    }
}

/// Detector for binary literals. Accepts on the terminal state alone.
pub fn detector() -> Detector<BinaryState> {
    Detector::new("binary", Acceptance::terminal())
}

/// Check whether `input` is a binary literal.
///
/// ```rust
/// use lexis::grammar::binary;
///
/// assert!(binary::is_valid("101"));
/// assert!(!binary::is_valid("10"));
/// assert!(!binary::is_valid("01"));
/// ```
pub fn is_valid(input: &str) -> bool {
    DETECTOR.is_valid(input)
}

/// Like [`is_valid`], but against custom character sets.
pub fn is_valid_with(input: &str, sets: &CharacterSets) -> bool {
    DETECTOR.is_valid_with(input, sets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn accepts_literals_bounded_by_ones() {
        for input in ["1", "11", "101", "111111", "10011010001"] {
            assert!(is_valid(input), "'{input}' should be valid");
        }
    }

    #[test]
    fn rejects_bad_start_end_or_character() {
        for input in ["", "0", "01", "10", "1000010", "100a01", "1 1", "2"] {
            assert!(!is_valid(input), "'{input}' should be invalid");
        }
    }

    #[test]
    fn transition_table() {
        let sets = CharacterSets::standard();
        use BinaryState::*;

        assert_eq!(AwaitingStart1.next('1', sets), ValidBinary);
        assert_eq!(AwaitingStart1.next('0', sets), Invalid);
        assert_eq!(ValidBinary.next('1', sets), ValidBinary);
        assert_eq!(ValidBinary.next('0', sets), LookingForOne);
        assert_eq!(ValidBinary.next('x', sets), Invalid);
        assert_eq!(LookingForOne.next('0', sets), LookingForOne);
        assert_eq!(LookingForOne.next('1', sets), ValidBinary);
        assert_eq!(LookingForOne.next('x', sets), Invalid);
    }

    #[test]
    fn invalid_absorbs_every_character() {
        let sets = CharacterSets::standard();
        for c in ['0', '1', 'a', ' ', '.'] {
            assert_eq!(BinaryState::Invalid.next(c, sets), BinaryState::Invalid);
        }
    }

    #[test]
    fn only_valid_binary_accepts() {
        assert!(BinaryState::ValidBinary.is_accepting());
        assert!(!BinaryState::AwaitingStart1.is_accepting());
        assert!(!BinaryState::LookingForOne.is_accepting());
        assert!(!BinaryState::Invalid.is_accepting());
    }

    #[test]
    fn terminal_state_rule_matches_trailing_one_rule() {
        // "Never invalid and ends with '1'" is an equivalent formulation.
        let sets = CharacterSets::standard();
        for input in ["1", "10", "101", "1001", "0", "01", "1a1", "", "11110"] {
            let terminal = detector().run(input, sets);
            let trailing_rule = !terminal.is_invalid() && input.ends_with('1');
            assert_eq!(is_valid(input), trailing_rule, "disagreement on '{input}'");
        }
    }
}
