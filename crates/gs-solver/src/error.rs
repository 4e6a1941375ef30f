//! Error types for solver operations.

use gs_system::SystemError;
use thiserror::Error;

/// Errors that can occur while iterating.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("System error: {0}")]
    System(#[from] SystemError),

    #[error(
        "Division by zero: '{variable}' has a zero coefficient in equation {equation} \
         (sweep {sweep})"
    )]
    Arithmetic {
        variable: String,
        equation: usize,
        sweep: usize,
    },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

pub type SolverResult<T> = Result<T, SolverError>;
