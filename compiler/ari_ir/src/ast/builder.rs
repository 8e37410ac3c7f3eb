//! Operator overloads that compose nodes into trees.
//!
//! `Expr` and `Variable` accept anything convertible into an `Expr` on the
//! right (another node, a variable, or a bare literal). A bare literal on
//! the left is covered by dedicated impls on `f64` and `i32`, so `7 + a`
//! and `7.0 + a` both build a node.
//!
//! Rust's compound-assignment traits (`AddAssign` and friends) mutate their
//! receiver and return `()`, so they cannot produce a node. Assignment
//! builders are inherent methods on [`Variable`] instead, which also keeps
//! them off every other node shape.

use std::ops::{Add, Div, Mul, Neg, Sub};

use super::expr::Expr;
use super::operators::{AssignOp, BinaryOp, UnaryOp};
use crate::Variable;

macro_rules! impl_literal_lhs {
    ($Trait:ident, $method:ident, $op:expr, $($lit:ty),+) => {
        $(
            impl $Trait<Expr> for $lit {
                type Output = Expr;

                #[inline]
                fn $method(self, rhs: Expr) -> Expr {
                    Expr::binary($op, self, rhs)
                }
            }

            impl $Trait<Variable> for $lit {
                type Output = Expr;

                #[inline]
                fn $method(self, rhs: Variable) -> Expr {
                    Expr::binary($op, self, rhs)
                }
            }
        )+
    };
}

macro_rules! impl_binary_builder {
    ($Trait:ident, $method:ident, $op:expr) => {
        impl<R: Into<Expr>> $Trait<R> for Expr {
            type Output = Expr;

            #[inline]
            fn $method(self, rhs: R) -> Expr {
                Expr::binary($op, self, rhs)
            }
        }

        impl<R: Into<Expr>> $Trait<R> for Variable {
            type Output = Expr;

            #[inline]
            fn $method(self, rhs: R) -> Expr {
                Expr::binary($op, self, rhs)
            }
        }

        impl_literal_lhs!($Trait, $method, $op, f64, i32);
    };
}

impl_binary_builder!(Add, add, BinaryOp::Add);
impl_binary_builder!(Sub, sub, BinaryOp::Sub);
impl_binary_builder!(Mul, mul, BinaryOp::Mul);
impl_binary_builder!(Div, div, BinaryOp::Div);

impl Neg for Expr {
    type Output = Expr;

    #[inline]
    fn neg(self) -> Expr {
        Expr::unary(UnaryOp::Minus, self)
    }
}

impl Neg for Variable {
    type Output = Expr;

    #[inline]
    fn neg(self) -> Expr {
        Expr::unary(UnaryOp::Minus, self)
    }
}

/// Assignment builders, written `target <<= value`, `target += value`, ...
/// when printed.
impl Variable {
    /// Build an assignment of any kind to this variable.
    pub fn compound(self, op: AssignOp, value: impl Into<Expr>) -> Expr {
        Expr::assign(op, self, value)
    }

    /// `self <<= value`: overwrite the slot.
    pub fn assign(self, value: impl Into<Expr>) -> Expr {
        self.compound(AssignOp::Assign, value)
    }

    /// `self += value`
    pub fn assign_add(self, value: impl Into<Expr>) -> Expr {
        self.compound(AssignOp::Add, value)
    }

    /// `self -= value`
    pub fn assign_sub(self, value: impl Into<Expr>) -> Expr {
        self.compound(AssignOp::Sub, value)
    }

    /// `self *= value`
    pub fn assign_mul(self, value: impl Into<Expr>) -> Expr {
        self.compound(AssignOp::Mul, value)
    }

    /// `self /= value`
    pub fn assign_div(self, value: impl Into<Expr>) -> Expr {
        self.compound(AssignOp::Div, value)
    }
}
