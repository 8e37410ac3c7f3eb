//! Ari - a small embedded arithmetic-expression language.
//!
//! Build expression trees from variables and literals with ordinary Rust
//! operators, evaluate them against a mutable environment, and print them
//! back as infix text.
//!
//! ```
//! use ari::{evaluate, render, SymbolTable};
//!
//! let mut table = SymbolTable::new();
//! let a = table.variable("a", 2.0);
//! let b = table.variable("b", 3.0);
//! let c = table.variable("c", 0.0);
//!
//! let step = c.assign_add(b - a * c);
//! assert_eq!(render(&step, &table), "c+=b-a*c");
//! assert_eq!(evaluate(&step, table.environment_mut()), Ok(3.0));
//! assert_eq!(table.environment()[c], 3.0);
//! ```
//!
//! # Crates
//!
//! - `ari_ir`: nodes, operators, variables, environment, symbol table
//! - `ari_eval`: the evaluator and its errors
//! - `ari_fmt`: the printer

use std::sync::Once;

pub use ari_eval::{
    division_by_zero, evaluate, evaluate_binary, evaluate_compound, evaluate_unary, EvalError,
    EvalErrorKind, EvalResult, Evaluator,
};
pub use ari_fmt::{render, render_to, Emitter, Printer, StringEmitter};
pub use ari_ir::{AssignOp, BinaryOp, Environment, Expr, SymbolTable, UnaryOp, Variable};

static TRACING_INIT: Once = Once::new();

/// Install a global `tracing` subscriber for Ari's log output.
///
/// Does nothing unless `RUST_LOG` is set; its value is the filter, e.g.
/// `RUST_LOG=ari_eval=trace` to see every evaluated node and assignment.
/// With `ARI_LOG_TREE` also set, spans are drawn as an indented tree, which
/// follows the shape of the evaluated expression.
///
/// Safe to call more than once. If the host application already installed a
/// global subscriber, that one is kept.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);
        let installed = if std::env::var_os("ARI_LOG_TREE").is_some() {
            registry
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_level(true))
                .try_init()
        };
        if installed.is_err() {
            tracing::debug!("global subscriber already set; keeping it");
        }
    });
}
