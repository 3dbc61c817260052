//! Detector that drives one grammar's automaton over an input string.

use crate::charset::CharacterSets;
use crate::core::{Acceptance, Automaton, Step, Trace};
use tracing::trace;

/// Whole-string classifier for one grammar.
///
/// A detector holds no per-call data: every call starts a fresh fold from
/// `S::INITIAL`, consumes the whole input and evaluates the acceptance rule
/// once at the end. Detectors are `Send + Sync` and can be shared freely.
///
/// # Example
///
/// ```rust
/// use lexis::core::Acceptance;
/// use lexis::grammar::integer::IntegerState;
/// use lexis::Detector;
///
/// let detector: Detector<IntegerState> = Detector::new("integer", Acceptance::terminal());
///
/// assert!(detector.is_valid("1000"));
/// assert!(!detector.is_valid("042"));
/// assert!(!detector.is_valid(""));
/// ```
#[derive(Debug)]
pub struct Detector<S: Automaton> {
    name: &'static str,
    acceptance: Acceptance<S>,
}

impl<S: Automaton> Detector<S> {
    /// Create a detector that folds from `S::INITIAL` and decides with `acceptance`.
    pub fn new(name: &'static str, acceptance: Acceptance<S>) -> Self {
        Self { name, acceptance }
    }

    /// Name used in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fold the automaton over every character of `input`, returning the terminal state.
    pub fn run(&self, input: &str, sets: &CharacterSets) -> S {
        input
            .chars()
            .fold(S::INITIAL, |state, c| state.next(c, sets))
    }

    /// Classify `input` against the standard character sets.
    pub fn is_valid(&self, input: &str) -> bool {
        self.is_valid_with(input, CharacterSets::standard())
    }

    /// Classify `input` against custom character sets.
    pub fn is_valid_with(&self, input: &str, sets: &CharacterSets) -> bool {
        let terminal = self.run(input, sets);
        let accepted = self.acceptance.check(&terminal, input, sets);

        trace!(
            grammar = self.name,
            state = terminal.name(),
            accepted,
            "classified input"
        );

        accepted
    }

    /// Fold over `input`, recording every transition taken.
    pub fn trace(&self, input: &str, sets: &CharacterSets) -> Trace<S> {
        let (_, trace) = input.chars().enumerate().fold(
            (S::INITIAL, Trace::new(S::INITIAL)),
            |(from, trace), (position, c)| {
                let to = from.next(c, sets);
                let step = Step {
                    from,
                    to,
                    input: c,
                    position,
                };
                (to, trace.record(step))
            },
        );
        trace
    }
}
