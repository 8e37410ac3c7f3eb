//! Expression nodes, operator tags, and the operator overloads that build
//! trees.

mod builder;
mod expr;
mod operators;

pub use expr::Expr;
pub use operators::{AssignOp, BinaryOp, UnaryOp};

#[cfg(test)]
mod tests;
