//! Arithmetic for the evaluator.
//!
//! Binary nodes and compound assignments share one routine so the zero
//! check on division lives in a single place. The check is exact: only a
//! divisor equal to `0.0` (or `-0.0`) fails; tiny non-zero divisors divide
//! normally.

use ari_ir::{AssignOp, BinaryOp, UnaryOp};

use crate::errors::{division_by_zero, EvalResult};

/// Apply `op` to two evaluated operands.
#[inline]
pub fn evaluate_binary(left: f64, right: f64, op: BinaryOp) -> EvalResult {
    apply(left, right, op, op.as_symbol())
}

/// Negate or pass through an evaluated operand.
#[inline]
pub fn evaluate_unary(value: f64, op: UnaryOp) -> f64 {
    match op {
        UnaryOp::Plus => value,
        UnaryOp::Minus => -value,
    }
}

/// Compute the value a compound assignment stores.
///
/// `current` is the slot's value before the store.
#[inline]
pub fn evaluate_compound(current: f64, value: f64, op: AssignOp) -> EvalResult {
    match op.arith() {
        None => Ok(value),
        Some(arith) => apply(current, value, arith, op.as_symbol()),
    }
}

fn apply(left: f64, right: f64, op: BinaryOp, symbol: &'static str) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Sub => Ok(left - right),
        BinaryOp::Mul => Ok(left * right),
        BinaryOp::Div => {
            if right == 0.0 {
                tracing::debug!(left, symbol, "division by zero");
                Err(division_by_zero(symbol))
            } else {
                Ok(left / right)
            }
        }
    }
}
