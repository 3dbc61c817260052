//! The five grammars and a closed enum for choosing between them.
//!
//! Each submodule owns one state set, its transition table, a `detector()`
//! constructor and an `is_valid` shortcut against the standard sets. No
//! grammar depends on another grammar's states.

pub mod binary;
pub mod email;
pub mod float;
pub mod integer;
pub mod password;

pub use password::PasswordViolation;

use crate::charset::CharacterSets;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors naming a grammar.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GrammarError {
    #[error("Unknown grammar '{0}'. Expected one of: binary, integer, float, email, password")]
    Unknown(String),
}

/// One of the fixed string shapes this crate recognizes.
///
/// # Example
///
/// ```rust
/// use lexis::Grammar;
///
/// let grammar: Grammar = "float".parse().unwrap();
/// assert!(grammar.is_valid("0.5"));
///
/// assert_eq!(Grammar::classify("101"), vec![Grammar::Binary, Grammar::Integer]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    Binary,
    Integer,
    Float,
    Email,
    Password,
}

impl Grammar {
    pub const ALL: [Grammar; 5] = [
        Grammar::Binary,
        Grammar::Integer,
        Grammar::Float,
        Grammar::Email,
        Grammar::Password,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    /// Classify `input` against the standard character sets.
    pub fn is_valid(&self, input: &str) -> bool {
        match self {
            Self::Binary => binary::is_valid(input),
            Self::Integer => integer::is_valid(input),
            Self::Float => float::is_valid(input),
            Self::Email => email::is_valid(input),
            Self::Password => password::is_valid(input),
        }
    }

    /// Classify `input` against custom character sets.
    pub fn is_valid_with(&self, input: &str, sets: &CharacterSets) -> bool {
        match self {
            Self::Binary => binary::is_valid_with(input, sets),
            Self::Integer => integer::is_valid_with(input, sets),
            Self::Float => float::is_valid_with(input, sets),
            Self::Email => email::is_valid_with(input, sets),
            Self::Password => password::is_valid_with(input, sets),
        }
    }

    /// Every grammar that accepts `input`, in [`Grammar::ALL`] order.
    pub fn classify(input: &str) -> Vec<Grammar> {
        Self::ALL
            .into_iter()
            .filter(|grammar| grammar.is_valid(input))
            .collect()
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Grammar {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|grammar| grammar.name() == wanted)
            .ok_or_else(|| GrammarError::Unknown(s.to_string()))
    }
}
