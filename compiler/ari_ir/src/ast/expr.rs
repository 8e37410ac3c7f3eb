//! Expression Types
//!
//! # Design Notes
//! - Each node owns its children through `Box`; trees never share
//!   subtrees and carry no back-references.
//! - Trees are immutable once built. Reuse happens by evaluating the same
//!   tree again against a changed environment.
//! - The assignment target is a [`Variable`], not an `Expr`, so an
//!   assignment to a computed value is unrepresentable.
//! - `Clone` and `PartialEq` recurse through `ensure_sufficient_stack`, and
//!   `Drop` tears the tree down with an explicit work list, so a chain
//!   hundreds of thousands of nodes deep is as safe to copy and free as it
//!   is to evaluate.

use std::mem;

use super::operators::{AssignOp, BinaryOp, UnaryOp};
use crate::Variable;
use ari_stack::ensure_sufficient_stack;

/// Expression node.
///
/// `PartialEq` compares structure; two trees are never "the same node".
#[derive(Debug)]
pub enum Expr {
    /// Numeric literal.
    Constant(f64),

    /// Read of an environment slot.
    Variable(Variable),

    /// Prefix operation: `op operand`
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// Infix operation: `left op right`
    ///
    /// `left` is evaluated before `right`.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Store into a variable: `target op value`
    ///
    /// Evaluates to the slot's new value.
    Assign {
        op: AssignOp,
        target: Variable,
        value: Box<Expr>,
    },
}

impl Expr {
    /// Numeric literal.
    #[inline]
    pub const fn constant(value: f64) -> Self {
        Expr::Constant(value)
    }

    pub fn unary(op: UnaryOp, operand: impl Into<Expr>) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand.into()),
        }
    }

    /// `+operand`. Rust has no unary plus operator, so this is the only way
    /// to build one.
    pub fn unary_plus(operand: impl Into<Expr>) -> Self {
        Self::unary(UnaryOp::Plus, operand)
    }

    /// `-operand`; equivalent to the `Neg` operator.
    pub fn unary_minus(operand: impl Into<Expr>) -> Self {
        Self::unary(UnaryOp::Minus, operand)
    }

    pub fn binary(op: BinaryOp, left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }

    pub fn assign(op: AssignOp, target: Variable, value: impl Into<Expr>) -> Self {
        Expr::Assign {
            op,
            target,
            value: Box::new(value.into()),
        }
    }

    /// Returns `true` if evaluating this tree cannot change the environment,
    /// i.e. no `Assign` node appears anywhere in it.
    pub fn is_pure(&self) -> bool {
        ensure_sufficient_stack(|| match self {
            Expr::Constant(_) | Expr::Variable(_) => true,
            Expr::Unary { operand, .. } => operand.is_pure(),
            Expr::Binary { left, right, .. } => left.is_pure() && right.is_pure(),
            Expr::Assign { .. } => false,
        })
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        ensure_sufficient_stack(|| match self {
            Expr::Constant(_) | Expr::Variable(_) => 1,
            Expr::Unary { operand, .. } => operand.depth() + 1,
            Expr::Binary { left, right, .. } => left.depth().max(right.depth()) + 1,
            Expr::Assign { value, .. } => value.depth() + 1,
        })
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Expr::Constant(value) => Expr::Constant(*value),
            Expr::Variable(var) => Expr::Variable(*var),
            Expr::Unary { op, operand } => Expr::Unary {
                op: *op,
                operand: operand.clone(),
            },
            Expr::Binary { op, left, right } => Expr::Binary {
                op: *op,
                left: left.clone(),
                right: right.clone(),
            },
            Expr::Assign { op, target, value } => Expr::Assign {
                op: *op,
                target: *target,
                value: value.clone(),
            },
        })
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Expr::Constant(a), Expr::Constant(b)) => a == b,
            (Expr::Variable(a), Expr::Variable(b)) => a == b,
            (
                Expr::Unary { op, operand },
                Expr::Unary {
                    op: other_op,
                    operand: other_operand,
                },
            ) => op == other_op && operand == other_operand,
            (
                Expr::Binary { op, left, right },
                Expr::Binary {
                    op: other_op,
                    left: other_left,
                    right: other_right,
                },
            ) => op == other_op && left == other_left && right == other_right,
            (
                Expr::Assign { op, target, value },
                Expr::Assign {
                    op: other_op,
                    target: other_target,
                    value: other_value,
                },
            ) => op == other_op && target == other_target && value == other_value,
            _ => false,
        })
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        // Each popped node has its children detached before it falls out of
        // scope, so its own drop never recurses past one level.
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

/// Move every non-leaf child of `expr` into `pending`, leaving a constant
/// in its place.
fn detach_children(expr: &mut Expr, pending: &mut Vec<Expr>) {
    let mut detach = |child: &mut Expr| {
        if !matches!(child, Expr::Constant(_) | Expr::Variable(_)) {
            pending.push(mem::replace(child, Expr::Constant(0.0)));
        }
    };
    match expr {
        Expr::Constant(_) | Expr::Variable(_) => {}
        Expr::Unary { operand, .. } => detach(operand),
        Expr::Binary { left, right, .. } => {
            detach(left);
            detach(right);
        }
        Expr::Assign { value, .. } => detach(value),
    }
}

impl From<f64> for Expr {
    #[inline]
    fn from(value: f64) -> Self {
        Expr::Constant(value)
    }
}

impl From<i32> for Expr {
    #[inline]
    fn from(value: i32) -> Self {
        Expr::Constant(f64::from(value))
    }
}

impl From<Variable> for Expr {
    #[inline]
    fn from(var: Variable) -> Self {
        Expr::Variable(var)
    }
}
