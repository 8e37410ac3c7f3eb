//! Ari IR - expression representation for the Ari expression language.
//!
//! This crate contains the data the two interpreters work on:
//! - [`Expr`]: the closed sum type of expression nodes
//! - [`BinaryOp`], [`UnaryOp`], [`AssignOp`]: operator tags
//! - [`Variable`]: a handle to one environment slot
//! - [`Environment`]: the numeric storage behind all variables
//! - [`SymbolTable`]: owner of the environment and the variable names
//!
//! # Building Trees
//!
//! Trees are composed with the ordinary arithmetic operators. Bare `f64`
//! literals are accepted on either side and become constants:
//!
//! ```
//! use ari_ir::{Expr, SymbolTable};
//!
//! let mut table = SymbolTable::new();
//! let a = table.variable("a", 2.0);
//! let c = table.variable("c", 0.0);
//!
//! let sum = (a + 1.0) * c;
//! let update = c.assign_add(a / 2.0);
//! assert!(sum.is_pure());
//! assert!(!update.is_pure());
//! ```
//!
//! Assignment builders only exist on [`Variable`], so an assignment whose
//! target is anything other than a variable cannot be written.

pub mod ast;
mod environment;
mod symbol_table;
mod variable;

pub use ast::{AssignOp, BinaryOp, Expr, UnaryOp};
pub use environment::Environment;
pub use symbol_table::SymbolTable;
pub use variable::Variable;
