//! Parse error types for locale tables.

use thiserror::Error;

/// An error that occurred during parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// A standalone plural rule key that does not follow the rule grammar.
    #[error("invalid plural rule '{rule}'")]
    InvalidRule { rule: String },
}
