//! Lexis: whole-string lexical classifiers built on explicit finite-state automata
//!
//! Lexis recognizes five fixed string shapes without a regular-expression
//! engine. Each grammar is a closed enum of states with a total, exhaustive
//! transition function; a detector folds that function over every character of
//! the input and applies an acceptance rule to the terminal state.
//!
//! # Core Concepts
//!
//! - **State**: Type-safe state sets via the `State` and `Automaton` traits
//! - **Invalid sink**: An ordinary variant that every character maps back to itself
//! - **Acceptance**: Pure predicates evaluated once the fold is complete
//! - **Character sets**: Immutable membership tables shared by reference
//!
//! Classification never fails: malformed, empty or unexpected input is simply
//! `false`.
//!
//! # Example
//!
//! ```rust
//! use lexis::grammar::{binary, email, float, integer, password};
//!
//! assert!(binary::is_valid("101"));
//! assert!(integer::is_valid("1000"));
//! assert!(float::is_valid(".123"));
//! assert!(email::is_valid("a@b.c"));
//! assert!(password::is_valid("A!aaaaaa"));
//!
//! assert!(!binary::is_valid(""));
//! assert!(!integer::is_valid("042"));
//! assert!(!float::is_valid("123."));
//! assert!(!email::is_valid("a@b@c.com"));
//! assert!(!password::is_valid("Aaaaaaaa!"));
//! ```

pub mod builder;
pub mod charset;
pub mod classifier;
pub mod core;
pub mod detector;
pub mod grammar;

// Re-export commonly used types
pub use crate::builder::{ClassifierBuilder, ConfigError};
pub use crate::charset::{CharSet, CharacterSets};
pub use crate::classifier::Classifier;
pub use crate::core::{Acceptance, Automaton, State};
pub use crate::detector::Detector;
pub use crate::grammar::{Grammar, GrammarError};
