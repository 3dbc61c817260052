//! Core automaton types and logic.
//!
//! This module contains the pure core of every classifier:
//! - State definitions via the `State` and `Automaton` traits
//! - Acceptance predicates evaluated after a fold completes
//! - Step-by-step traces of a fold
//!
//! All logic in this module is pure (no side effects). States are immutable
//! values and transitions return new states.

mod acceptance;
mod state;
mod trace;

pub use acceptance::Acceptance;
pub use state::{Automaton, State};
pub use trace::{Step, Trace};
