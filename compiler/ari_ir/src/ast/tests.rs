use crate::{AssignOp, BinaryOp, Expr, SymbolTable, UnaryOp, Variable};
use pretty_assertions::assert_eq;

fn abc() -> (Variable, Variable, Variable) {
    let mut table = SymbolTable::new();
    let a = table.variable("a", 2.0);
    let b = table.variable("b", 3.0);
    let c = table.variable("c", 0.0);
    (a, b, c)
}

#[test]
fn test_operators_build_binary_nodes() {
    let (a, b, _) = abc();
    assert_eq!(
        a + b,
        Expr::Binary {
            op: BinaryOp::Add,
            left: Box::new(Expr::Variable(a)),
            right: Box::new(Expr::Variable(b)),
        }
    );
    assert_eq!(a - b, Expr::binary(BinaryOp::Sub, a, b));
    assert_eq!(a * b, Expr::binary(BinaryOp::Mul, a, b));
    assert_eq!(a / b, Expr::binary(BinaryOp::Div, a, b));
}

#[test]
fn test_literals_become_constants_on_either_side() {
    let (a, b, _) = abc();
    assert_eq!(a + 2, Expr::binary(BinaryOp::Add, a, Expr::Constant(2.0)));
    assert_eq!(a - 0.5, Expr::binary(BinaryOp::Sub, a, Expr::Constant(0.5)));
    assert_eq!(7.0 + a, Expr::binary(BinaryOp::Add, Expr::Constant(7.0), a));
    assert_eq!(7 + a, Expr::binary(BinaryOp::Add, Expr::Constant(7.0), a));
    assert_eq!(
        10 / (a - b),
        Expr::binary(BinaryOp::Div, Expr::Constant(10.0), a - b)
    );
    assert_eq!(
        Expr::constant(2.0) * 4.0,
        Expr::binary(BinaryOp::Mul, Expr::Constant(2.0), Expr::Constant(4.0))
    );
}

#[test]
fn test_nesting_follows_construction() {
    let (a, b, c) = abc();
    // a - (b - c) keeps the explicit grouping as the right child.
    let expr = a - (b - c);
    let Expr::Binary { op, left, right } = &expr else {
        panic!("expected binary node");
    };
    assert_eq!(*op, BinaryOp::Sub);
    assert_eq!(**left, Expr::Variable(a));
    assert_eq!(**right, Expr::binary(BinaryOp::Sub, b, c));
}

#[test]
fn test_negation_and_unary_plus() {
    let (a, _, _) = abc();
    assert_eq!(-a, Expr::unary(UnaryOp::Minus, a));
    assert_eq!(-(a + 1.0), Expr::unary_minus(a + 1.0));
    assert_eq!(
        Expr::unary_plus(a),
        Expr::Unary {
            op: UnaryOp::Plus,
            operand: Box::new(Expr::Variable(a)),
        }
    );
}

#[test]
fn test_assignment_builders_target_variable() {
    let (a, b, c) = abc();
    assert_eq!(c.assign(b - a), Expr::assign(AssignOp::Assign, c, b - a));
    assert_eq!(c.assign_add(b), Expr::assign(AssignOp::Add, c, b));
    assert_eq!(c.assign_sub(1), Expr::assign(AssignOp::Sub, c, 1.0));
    assert_eq!(c.assign_mul(a), Expr::assign(AssignOp::Mul, c, a));
    assert_eq!(c.assign_div(a), c.compound(AssignOp::Div, a));

    let store = c.assign(4);
    let Expr::Assign { target, .. } = &store else {
        panic!("expected assign node");
    };
    assert_eq!(*target, c);
}

#[test]
fn test_operator_symbols() {
    let binary: Vec<_> = [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div]
        .iter()
        .map(|op| op.as_symbol())
        .collect();
    assert_eq!(binary, vec!["+", "-", "*", "/"]);

    let assign: Vec<_> = [
        AssignOp::Assign,
        AssignOp::Add,
        AssignOp::Sub,
        AssignOp::Mul,
        AssignOp::Div,
    ]
    .iter()
    .map(|op| op.as_symbol())
    .collect();
    assert_eq!(assign, vec!["<<=", "+=", "-=", "*=", "/="]);

    assert_eq!(UnaryOp::Plus.as_symbol(), "");
    assert_eq!(UnaryOp::Minus.as_symbol(), "-");
}

#[test]
fn test_compound_arith_mapping() {
    assert_eq!(AssignOp::Assign.arith(), None);
    assert_eq!(AssignOp::Add.arith(), Some(BinaryOp::Add));
    assert_eq!(AssignOp::Sub.arith(), Some(BinaryOp::Sub));
    assert_eq!(AssignOp::Mul.arith(), Some(BinaryOp::Mul));
    assert_eq!(AssignOp::Div.arith(), Some(BinaryOp::Div));
}

#[test]
fn test_is_pure() {
    let (a, b, c) = abc();
    assert!(Expr::constant(1.0).is_pure());
    assert!(((a + b) * -c).is_pure());
    assert!(!c.assign(a).is_pure());
    // An assignment buried on the right still counts.
    assert!(!(a + c.assign_add(1)).is_pure());
}

#[test]
fn test_depth() {
    let (a, b, c) = abc();
    assert_eq!(Expr::from(a).depth(), 1);
    assert_eq!((a + b).depth(), 2);
    assert_eq!(((a + b) * c).depth(), 3);
    assert_eq!(c.assign(-(a + b)).depth(), 4);
}

#[test]
fn test_stored_tree_is_reusable_by_clone() {
    let (a, b, c) = abc();
    let shared = (a + b) * c;
    let bigger = shared.clone() + shared.clone();
    assert_eq!(bigger, Expr::binary(BinaryOp::Add, shared.clone(), shared));
}

/// `((a + 1) + 1) + ...`, `len` additions deep.
fn chain(len: usize) -> Expr {
    let (a, _, _) = abc();
    let mut expr = Expr::from(a);
    for _ in 0..len {
        expr = expr + 1.0;
    }
    expr
}

#[test]
fn test_deep_tree_clones_compares_and_drops() {
    let expr = chain(300_000);
    let copy = expr.clone();
    assert_eq!(copy.depth(), 300_001);
    assert!(copy == expr);
    drop(copy);
    drop(expr);
}

#[test]
fn test_deep_tree_drop_through_every_node_shape() {
    let (a, b, c) = abc();
    let mut expr = Expr::from(b);
    for i in 0..100_000 {
        expr = match i % 3 {
            0 => -expr,
            1 => c.assign_add(expr),
            _ => a * expr,
        };
    }
    assert!(!expr.is_pure());
    drop(expr);
}
