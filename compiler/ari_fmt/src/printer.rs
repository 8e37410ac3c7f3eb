//! Tree walk that turns an expression back into infix text.

use std::fmt;

use ari_ir::{Expr, SymbolTable};
use ari_stack::ensure_sufficient_stack;

use crate::emitter::{Emitter, FormatterEmitter, StringEmitter};

/// `Display` adapter pairing a tree with the table that names its
/// variables.
#[derive(Copy, Clone)]
pub struct Printer<'a> {
    table: &'a SymbolTable,
    expr: &'a Expr,
}

impl<'a> Printer<'a> {
    pub fn new(table: &'a SymbolTable, expr: &'a Expr) -> Self {
        Printer { table, expr }
    }
}

impl fmt::Display for Printer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut emitter = FormatterEmitter::new(f);
        render_to(&mut emitter, self.expr, self.table);
        emitter.finish()
    }
}

/// Render `expr` to a new `String`.
pub fn render(expr: &Expr, table: &SymbolTable) -> String {
    let mut emitter = StringEmitter::new();
    render_to(&mut emitter, expr, table);
    emitter.output()
}

/// Render `expr` into `emitter`.
///
/// - constants use Rust's shortest round-trip float form (`2`, `0.5`)
/// - variables print their declared name
/// - unary plus prints nothing, unary minus prints `-`
/// - binary and assignment nodes print `left op right` with no spacing
///   and no parentheses
pub fn render_to<E: Emitter + ?Sized>(emitter: &mut E, expr: &Expr, table: &SymbolTable) {
    ensure_sufficient_stack(|| match expr {
        Expr::Constant(value) => emitter.emit(&value.to_string()),
        Expr::Variable(var) => emitter.emit(table.name_of(*var)),
        Expr::Unary { op, operand } => {
            emitter.emit(op.as_symbol());
            render_to(emitter, operand, table);
        }
        Expr::Binary { op, left, right } => {
            render_to(emitter, left, table);
            emitter.emit(op.as_symbol());
            render_to(emitter, right, table);
        }
        Expr::Assign { op, target, value } => {
            emitter.emit(table.name_of(*target));
            emitter.emit(op.as_symbol());
            render_to(emitter, value, table);
        }
    });
}
