//! Phrase interpretation errors

use thiserror::Error;

/// Result type for phrase interpretation
pub type InterpretResult<T> = Result<T, InterpretError>;

/// Errors raised while interpreting a phrase
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpretError {
    /// No rule fired, or a rule's trailing data was missing or malformed.
    /// Carries what could not be parsed (`query`, `length`, `letter`).
    #[error("Unable to parse {0}")]
    Unparseable(String),
}
