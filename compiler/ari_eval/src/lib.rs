//! Ari Eval - evaluator for Ari expression trees.
//!
//! # Architecture
//!
//! - [`Evaluator`]: walks a tree against a mutably borrowed
//!   [`Environment`](ari_ir::Environment), one exhaustive `match` per node
//! - [`evaluate_binary`] / [`evaluate_unary`] / [`evaluate_compound`]:
//!   enum-dispatched arithmetic shared by binary nodes and compound
//!   assignment
//! - [`EvalError`]: the failures evaluation can report
//!
//! Evaluation only mutates the environment through `Assign` nodes. A failed
//! evaluation does not roll back assignments that completed before the
//! failure.

pub mod errors;
mod evaluator;
mod operators;

pub use errors::{division_by_zero, EvalError, EvalErrorKind, EvalResult};
pub use evaluator::{evaluate, Evaluator};
pub use operators::{evaluate_binary, evaluate_compound, evaluate_unary};

#[cfg(test)]
mod tests;
