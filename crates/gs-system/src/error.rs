//! Parse and assembly error types.

use gs_core::GsError;
use thiserror::Error;

/// Errors raised while turning one equation string into an [`Equation`](crate::Equation).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Malformed term '{token}': {what}")]
    MalformedTerm { token: String, what: &'static str },

    #[error("Malformed equation '{equation}': {what}")]
    MalformedEquation {
        equation: String,
        what: &'static str,
    },

    #[error("Variable '{symbol}' appears more than once in the same equation")]
    DuplicateVariable { symbol: String },

    #[error("Numeric error: {0}")]
    Numeric(#[from] GsError),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Errors raised while assembling or checking a [`LinearSystem`](crate::LinearSystem).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SystemError {
    #[error("Equation {index} could not be parsed: {source}")]
    Parse {
        index: usize,
        #[source]
        source: ParseError,
    },

    #[error(
        "System has {equations} equations for {variables} variables; \
         each variable needs exactly one equation"
    )]
    Structural { equations: usize, variables: usize },

    #[error("Dimension mismatch: {what} (expected {expected}, got {actual})")]
    Dimension {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub type SystemResult<T> = Result<T, SystemError>;
