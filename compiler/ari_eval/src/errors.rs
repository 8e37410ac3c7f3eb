//! Evaluation errors.
//!
//! Errors are built through the factory functions here rather than by
//! naming variants at each failure site.

use thiserror::Error;

/// Result of evaluation.
pub type EvalResult<T = f64> = Result<T, EvalError>;

/// Error raised while evaluating a tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A division whose divisor evaluated to exactly zero.
    ///
    /// `symbol` is the operator that failed: `/` for a binary node, `/=` for
    /// a compound assignment.
    #[error("division by zero in `{symbol}`")]
    DivisionByZero { symbol: &'static str },
}

/// Error category, independent of where the error was raised.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EvalErrorKind {
    DivisionByZero,
}

impl EvalError {
    pub fn kind(&self) -> EvalErrorKind {
        match self {
            EvalError::DivisionByZero { .. } => EvalErrorKind::DivisionByZero,
        }
    }
}

/// Division by zero at `symbol`.
#[cold]
pub fn division_by_zero(symbol: &'static str) -> EvalError {
    EvalError::DivisionByZero { symbol }
}
