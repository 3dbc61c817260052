//! Core State and Automaton traits for grammar states.
//!
//! Every grammar is a closed set of state variants. `State` describes what a
//! variant is, `Automaton` describes where it goes on the next character.

use crate::charset::CharacterSets;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for automaton states.
///
/// All methods are pure - no side effects. States are immutable values;
/// consuming a character produces a new state rather than mutating one.
///
/// # Required Traits
///
/// - `Copy`: States are plain tags and are folded by value
/// - `PartialEq` + `Eq` + `Hash`: States must be comparable for acceptance logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for traces
///
/// # Example
///
/// ```rust
/// use lexis::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum ParityState {
///     Even,
///     Odd,
///     Invalid,
/// }
///
/// impl State for ParityState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Even => "Even",
///             Self::Odd => "Odd",
///             Self::Invalid => "Invalid",
///         }
///     }
///
///     fn is_accepting(&self) -> bool {
///         matches!(self, Self::Even)
///     }
///
///     fn is_invalid(&self) -> bool {
///         matches!(self, Self::Invalid)
///     }
/// }
/// ```
pub trait State:
    Copy
    + PartialEq
    + Eq
    + Hash
    + Debug
    + Serialize
    + for<'de> Deserialize<'de>
    + Send
    + Sync
    + 'static
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if end-of-input in this state counts as a match.
    ///
    /// Some grammars add auxiliary checks on top of this; see
    /// [`Acceptance`](crate::core::Acceptance).
    ///
    /// Default implementation returns `false`.
    fn is_accepting(&self) -> bool {
        false
    }

    /// Check if this is the absorbing failure sink.
    ///
    /// Once a fold reaches an invalid state it stays there for every
    /// remaining character.
    ///
    /// Default implementation returns `false`.
    fn is_invalid(&self) -> bool {
        false
    }
}

/// A state set with a fixed entry point and a total transition function.
///
/// `next` must be defined for every `(state, char)` pair. Characters a grammar
/// does not expect route to the invalid sink (or, for grammars without one,
/// to a non-accepting state), never silently to an accepting state.
///
/// # Example
///
/// ```rust
/// use lexis::core::{Automaton, State};
/// use lexis::CharacterSets;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DigitRun {
///     Start,
///     Digits,
///     Invalid,
/// }
///
/// impl State for DigitRun {
///     fn name(&self) -> &str {
///         match self {
///             Self::Start => "Start",
///             Self::Digits => "Digits",
///             Self::Invalid => "Invalid",
///         }
///     }
///
///     fn is_accepting(&self) -> bool {
///         matches!(self, Self::Digits)
///     }
///
///     fn is_invalid(&self) -> bool {
///         matches!(self, Self::Invalid)
///     }
/// }
///
/// impl Automaton for DigitRun {
///     const INITIAL: Self = Self::Start;
///
///     fn next(self, c: char, sets: &CharacterSets) -> Self {
///         match self {
///             Self::Start | Self::Digits if sets.digits.contains(c) => Self::Digits,
///             _ => Self::Invalid,
///         }
///     }
/// }
///
/// let sets = CharacterSets::standard();
/// let end = "42".chars().fold(DigitRun::INITIAL, |s, c| s.next(c, sets));
/// assert!(end.is_accepting());
/// ```
pub trait Automaton: State {
    /// The state every fold starts from. Never accepting.
    const INITIAL: Self;

    /// Consume one character, yielding the next state.
    fn next(self, c: char, sets: &CharacterSets) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Start,
        Letters,
        Invalid,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Letters => "Letters",
                Self::Invalid => "Invalid",
            }
        }

        fn is_accepting(&self) -> bool {
            matches!(self, Self::Letters)
        }

        fn is_invalid(&self) -> bool {
            matches!(self, Self::Invalid)
        }
    }

    impl Automaton for TestState {
        const INITIAL: Self = Self::Start;

        fn next(self, c: char, sets: &CharacterSets) -> Self {
            match self {
                Self::Start | Self::Letters if sets.capital_letters.contains(c) => Self::Letters,
                _ => Self::Invalid,
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Start.name(), "Start");
        assert_eq!(TestState::Letters.name(), "Letters");
        assert_eq!(TestState::Invalid.name(), "Invalid");
    }

    #[test]
    fn is_accepting_identifies_accepting_states() {
        assert!(!TestState::Start.is_accepting());
        assert!(TestState::Letters.is_accepting());
        assert!(!TestState::Invalid.is_accepting());
    }

    #[test]
    fn is_invalid_identifies_sink() {
        assert!(!TestState::Start.is_invalid());
        assert!(!TestState::Letters.is_invalid());
        assert!(TestState::Invalid.is_invalid());
    }

    #[test]
    fn next_returns_new_state_without_touching_old() {
        let sets = CharacterSets::standard();
        let start = TestState::INITIAL;
        let next = start.next('Q', sets);

        assert_eq!(start, TestState::Start);
        assert_eq!(next, TestState::Letters);
    }

    #[test]
    fn invalid_state_absorbs() {
        let sets = CharacterSets::standard();
        for c in ['A', 'z', '0', ' ', '!', 'é'] {
            assert_eq!(TestState::Invalid.next(c, sets), TestState::Invalid);
        }
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Letters;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
