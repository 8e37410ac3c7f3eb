//! Tree-walking evaluation.

use ari_ir::{Environment, Expr};
use ari_stack::ensure_sufficient_stack;

use crate::errors::EvalResult;
use crate::operators::{evaluate_binary, evaluate_compound, evaluate_unary};

/// Evaluates trees against an environment it borrows exclusively.
///
/// The borrow lasts as long as the evaluator, so several trees can be
/// evaluated in sequence and each sees the assignments of the ones before
/// it:
///
/// ```
/// use ari_eval::Evaluator;
/// use ari_ir::SymbolTable;
///
/// let mut table = SymbolTable::new();
/// let x = table.variable("x", 1.0);
///
/// let mut eval = Evaluator::new(table.environment_mut());
/// assert_eq!(eval.eval(&x.assign_mul(10)), Ok(10.0));
/// assert_eq!(eval.eval(&(x + 1.0)), Ok(11.0));
/// ```
pub struct Evaluator<'env> {
    env: &'env mut Environment,
}

impl<'env> Evaluator<'env> {
    pub fn new(env: &'env mut Environment) -> Self {
        Evaluator { env }
    }

    /// The environment as it stands after everything evaluated so far.
    pub fn env(&self) -> &Environment {
        &*self.env
    }

    /// Evaluate `expr`, applying any assignments it contains.
    ///
    /// Operands are evaluated left to right; an assignment evaluates its
    /// value before touching its target. On error, assignments that already
    /// ran stay applied.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn eval(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Constant(value) => Ok(*value),
            Expr::Variable(var) => Ok(self.env[*var]),
            Expr::Unary { op, operand } => {
                let value = self.eval(operand)?;
                Ok(evaluate_unary(value, *op))
            }
            Expr::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(left, right, *op)
            }
            Expr::Assign { op, target, value } => {
                let value = self.eval(value)?;
                let slot = self.env.slot_mut(*target);
                let old = *slot;
                *slot = evaluate_compound(old, value, *op)?;
                tracing::trace!(
                    index = target.index(),
                    op = op.as_symbol(),
                    old,
                    new = *slot,
                    "assigned"
                );
                Ok(*slot)
            }
        }
    }
}

/// Evaluate `expr` once against `env`.
pub fn evaluate(expr: &Expr, env: &mut Environment) -> EvalResult {
    Evaluator::new(env).eval(expr)
}
