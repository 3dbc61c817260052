//! Configuration errors for classifier construction.

use crate::charset::SetViolation;
use thiserror::Error;

/// Errors that can occur when building a classifier from custom sets.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse character set configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Character sets are inconsistent: {0:?}")]
    Invalid(Vec<SetViolation>),
}
