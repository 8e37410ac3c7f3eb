//! Ari Fmt - printer for Ari expression trees.
//!
//! Renders a tree as flat infix text, resolving variables to their names
//! through a [`SymbolTable`](ari_ir::SymbolTable). No parentheses are
//! inserted: the output spells out the operators in tree order and nothing
//! else.
//!
//! ```
//! use ari_fmt::{render, Printer};
//! use ari_ir::SymbolTable;
//!
//! let mut table = SymbolTable::new();
//! let a = table.variable("a", 2.0);
//! let b = table.variable("b", 3.0);
//!
//! assert_eq!(render(&(a + b), &table), "a+b");
//! assert_eq!(render(&a.assign_add(b), &table), "a+=b");
//! assert_eq!(Printer::new(&table, &(a + 2)).to_string(), "a+2");
//! ```
//!
//! # Modules
//!
//! - [`emitter`]: output sinks the printer writes into
//! - [`printer`]: the tree walk and the `Display` adapter

pub mod emitter;
pub mod printer;

pub use emitter::{Emitter, StringEmitter};
pub use printer::{render, render_to, Printer};
