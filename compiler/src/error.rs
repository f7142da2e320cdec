use thiserror::Error;

use crate::{types::Schema, utils::quote};

#[derive(Debug, Error)]
pub enum KiwiError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected character {} at line {line}, column {column}", quote(.found))]
    UnexpectedCharacter {
        found:  String,
        line:   usize,
        column: usize,
    },

    #[error("Expected {expected} but found {} at line {line}, column {column}", quote(.found))]
    Expected {
        expected: String,
        found:    String,
        line:     usize,
        column:   usize,
    },

    #[error("Unexpected token {} at line {line}, column {column}", quote(.found))]
    UnexpectedToken {
        found:  String,
        line:   usize,
        column: usize,
    },

    #[error("Invalid integer {} at line {line}, column {column}", quote(.text))]
    InvalidInteger {
        text:   String,
        line:   usize,
        column: usize,
    },

    #[error("Cannot deprecate field {} at line {line}, column {column}", quote(.field))]
    CannotDeprecate {
        field:  String,
        line:   usize,
        column: usize,
    },

    #[error("Invalid name {}", quote(.0))]
    InvalidName(String),

    #[error("Field {} does not fit in {kind} \"{definition}\": {reason}", quote(.field))]
    InvalidField {
        definition: String,
        kind:       String,
        field:      String,
        reason:     &'static str,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KiwiError {
    /// Source position `(line, column)` for errors raised while reading
    /// schema text.
    pub fn position(&self) -> Option<(usize, usize)> {
        match *self {
            KiwiError::UnexpectedCharacter { line, column, .. }
            | KiwiError::Expected { line, column, .. }
            | KiwiError::UnexpectedToken { line, column, .. }
            | KiwiError::InvalidInteger { line, column, .. }
            | KiwiError::CannotDeprecate { line, column, .. } => Some((line, column)),
            _ => None,
        }
    }
}

/// A parse that stopped at its first error. `partial` holds every definition
/// completed before the error.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct ParseFailure {
    pub partial: Schema,
    pub error:   KiwiError,
}

impl From<ParseFailure> for KiwiError {
    fn from(failure: ParseFailure) -> Self {
        failure.error
    }
}
