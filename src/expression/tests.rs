use pretty_assertions::assert_eq;

use crate::expression::{Expression, Operator, evaluate, stringify};

fn num(n: f64) -> Expression {
    Expression::Number(n)
}

#[test]
fn test_operator_symbols_round_trip() {
    for op in Operator::ALL {
        assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
    }
    assert_eq!(Operator::from_symbol('&'), None);
    assert_eq!(Operator::from_symbol('('), None);
}

#[test]
fn test_operator_precedence_ranks() {
    let ranks: Vec<u8> = Operator::ALL.iter().map(|op| op.precedence_rank()).collect();
    assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    assert!(Operator::Sub.precedence_rank() > Operator::Add.precedence_rank());
    assert!(Operator::Div.precedence_rank() > Operator::Mul.precedence_rank());
}

#[test]
fn test_evaluate_leaf() {
    assert_eq!(num(2.5).evaluate(), 2.5);
}

#[test]
fn test_evaluate_each_operator() {
    let cases = [
        (Operator::Add, 7.0),
        (Operator::Sub, 3.0),
        (Operator::Mul, 10.0),
        (Operator::Div, 2.5),
        (Operator::Pow, 25.0),
    ];
    for (op, expected) in cases {
        let expr = Expression::binary(num(5.0), op, num(2.0));
        assert_eq!(expr.evaluate(), expected, "operator {}", op);
    }
}

#[test]
fn test_evaluate_nested() {
    // (1 + 4) - (2 * (3 - 2)) = 3
    let expr = Expression::binary(
        Expression::binary(num(1.0), Operator::Add, num(4.0)),
        Operator::Sub,
        Expression::binary(
            num(2.0),
            Operator::Mul,
            Expression::binary(num(3.0), Operator::Sub, num(2.0)),
        ),
    );
    assert_eq!(evaluate(&expr), 3.0);
}

#[test]
fn test_division_by_zero_is_infinite() {
    let expr = Expression::binary(num(1.0), Operator::Div, num(0.0));
    assert_eq!(expr.evaluate(), f64::INFINITY);

    let expr = Expression::binary(num(0.0), Operator::Div, num(0.0));
    assert!(expr.evaluate().is_nan());
}

#[test]
fn test_fractional_and_negative_exponents() {
    let root = Expression::binary(num(9.0), Operator::Pow, num(0.5));
    assert!((root.evaluate() - 3.0).abs() < 1e-12);

    let negative = Expression::binary(
        num(2.0),
        Operator::Pow,
        Expression::binary(num(0.0), Operator::Sub, num(1.0)),
    );
    assert_eq!(negative.evaluate(), 0.5);
}

#[test]
fn test_display_leaf_drops_trailing_zero() {
    assert_eq!(num(3.0).to_string(), "3");
    assert_eq!(num(0.25).to_string(), "0.25");
}

#[test]
fn test_display_fully_bracketed() {
    let expr = Expression::binary(
        Expression::binary(num(1.0), Operator::Add, num(4.0)),
        Operator::Sub,
        num(1.0),
    );
    assert_eq!(stringify(&expr), "((1 + 4) - 1)");
}

#[test]
fn test_depth() {
    assert_eq!(num(1.0).depth(), 1);
    let expr = Expression::binary(
        num(1.0),
        Operator::Add,
        Expression::binary(num(2.0), Operator::Mul, num(3.0)),
    );
    assert_eq!(expr.depth(), 3);
}

#[test]
fn test_latex_operators() {
    let div = Expression::binary(num(1.0), Operator::Div, num(2.0));
    assert_eq!(div.to_latex(), "\\frac{1}{2}");

    let mul = Expression::binary(
        Expression::binary(num(1.0), Operator::Add, num(2.0)),
        Operator::Mul,
        num(3.5),
    );
    assert_eq!(mul.to_latex(), "\\left(1 + 2\\right) \\cdot 3.5");

    let pow = Expression::binary(
        Expression::binary(num(2.0), Operator::Pow, num(3.0)),
        Operator::Pow,
        num(2.0),
    );
    assert_eq!(pow.to_latex(), "\\left(2^{3}\\right)^{2}");
}

#[test]
fn test_latex_keeps_right_grouping_of_subtraction() {
    let expr = Expression::binary(
        num(1.0),
        Operator::Sub,
        Expression::binary(num(2.0), Operator::Add, num(3.0)),
    );
    assert_eq!(expr.to_latex(), "1 - \\left(2 + 3\\right)");

    let left = Expression::binary(
        Expression::binary(num(1.0), Operator::Sub, num(2.0)),
        Operator::Sub,
        num(3.0),
    );
    assert_eq!(left.to_latex(), "1 - 2 - 3");
}

#[test]
fn test_latex_non_finite_leaves() {
    assert_eq!(num(f64::INFINITY).to_latex(), "\\infty");
    assert_eq!(num(f64::NAN).to_latex(), "\\mathrm{NaN}");
}
