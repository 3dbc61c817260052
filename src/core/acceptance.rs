//! Acceptance predicates evaluated once a fold has consumed its input.
//!
//! Most grammars accept purely on the terminal state. Some also look at the
//! original input (length, trailing character) after the fold completes.

use super::state::State;
use crate::charset::CharacterSets;
use std::fmt;

type Predicate<S> = Box<dyn Fn(&S, &str, &CharacterSets) -> bool + Send + Sync>;

/// Pure predicate that decides whether a terminal state counts as a match.
///
/// The predicate receives the terminal state, the original input and the
/// character sets the fold ran against.
///
/// # Example
///
/// ```rust
/// use lexis::core::Acceptance;
/// use lexis::grammar::integer::IntegerState;
/// use lexis::CharacterSets;
///
/// let sets = CharacterSets::standard();
/// let short_numbers = Acceptance::new(|state: &IntegerState, input: &str, _sets: &CharacterSets| {
///     matches!(state, IntegerState::Valid) && input.len() <= 3
/// });
///
/// assert!(short_numbers.check(&IntegerState::Valid, "123", sets));
/// assert!(!short_numbers.check(&IntegerState::Valid, "1234", sets));
/// assert!(!short_numbers.check(&IntegerState::Invalid, "12", sets));
/// ```
pub struct Acceptance<S: State> {
    predicate: Predicate<S>,
}

impl<S: State> Acceptance<S> {
    /// Create an acceptance rule from a pure predicate.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S, &str, &CharacterSets) -> bool + Send + Sync + 'static,
    {
        Acceptance {
            predicate: Box::new(predicate),
        }
    }

    /// Accept exactly when the terminal state is an accepting state.
    pub fn terminal() -> Self {
        Self::new(|state: &S, _input: &str, _sets: &CharacterSets| state.is_accepting())
    }

    /// Evaluate the rule against a completed fold.
    pub fn check(&self, state: &S, input: &str, sets: &CharacterSets) -> bool {
        (self.predicate)(state, input, sets)
    }
}

impl<S: State> fmt::Debug for Acceptance<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Acceptance").finish_non_exhaustive()
    }
}
