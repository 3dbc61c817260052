//! Step-by-step record of one automaton fold.
//!
//! A trace is a diagnostic view of a single classification: the initial state
//! and every transition taken, one per input character.

use super::state::State;
use serde::{Deserialize, Serialize};

/// Record of a single character transition.
///
/// # Example
///
/// ```rust
/// use lexis::core::Step;
/// use lexis::grammar::binary::BinaryState;
///
/// let step = Step {
///     from: BinaryState::AwaitingStart1,
///     to: BinaryState::ValidBinary,
///     input: '1',
///     position: 0,
/// };
/// assert_eq!(step.input, '1');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Step<S: State> {
    /// The state before the character was consumed
    pub from: S,
    /// The state after the character was consumed
    pub to: S,
    /// The consumed character
    pub input: char,
    /// Zero-based character index within the input
    pub position: usize,
}

/// Ordered record of a fold over one input.
///
/// Traces are values - `record` returns a new trace with the step appended.
///
/// # Example
///
/// ```rust
/// use lexis::core::State;
/// use lexis::grammar::binary;
/// use lexis::CharacterSets;
///
/// let trace = binary::detector().trace("10", CharacterSets::standard());
///
/// let path: Vec<&str> = trace.get_path().into_iter().map(|s| s.name()).collect();
/// assert_eq!(path, ["AwaitingStart1", "ValidBinary", "LookingForOne"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Trace<S: State> {
    initial: S,
    steps: Vec<Step<S>>,
}

impl<S: State> Trace<S> {
    /// Create an empty trace starting at `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            initial,
            steps: Vec::new(),
        }
    }

    /// Append a step, returning the extended trace.
    pub fn record(mut self, step: Step<S>) -> Self {
        self.steps.push(step);
        self
    }

    /// Get the path of states traversed.
    ///
    /// Returns the initial state followed by the `to` state of each step, so
    /// an input of `n` characters yields a path of `n + 1` states.
    pub fn get_path(&self) -> Vec<&S> {
        std::iter::once(&self.initial)
            .chain(self.steps.iter().map(|step| &step.to))
            .collect()
    }

    /// Get all steps in input order.
    pub fn steps(&self) -> &[Step<S>] {
        &self.steps
    }

    /// The state the fold started from.
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// The state the fold ended in (the initial state for empty input).
    pub fn final_state(&self) -> &S {
        self.steps.last().map_or(&self.initial, |step| &step.to)
    }

    /// Character index at which the fold first entered the invalid sink.
    pub fn absorbed_at(&self) -> Option<usize> {
        self.steps
            .iter()
            .find(|step| step.to.is_invalid())
            .map(|step| step.position)
    }
}
