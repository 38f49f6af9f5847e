use crate::expression::ast::Expression;
use crate::expression::operator::Operator;

impl Expression {
    /// Render the expression as LaTeX.
    /// - Uses \cdot for multiplication
    /// - Uses \frac for division, so neither side needs brackets
    /// - Puts the exponent in braces and brackets any compound base
    /// - Brackets only where conventional precedence would regroup the tree
    pub fn to_latex(&self) -> String {
        fn binding(expr: &Expression) -> u8 {
            match expr {
                Expression::Binary(_, Operator::Add | Operator::Sub, _) => 1,
                Expression::Binary(_, Operator::Mul | Operator::Div, _) => 2,
                Expression::Binary(_, Operator::Pow, _) => 3,
                Expression::Number(_) => 4,
            }
        }

        fn wrap_parens(s: String) -> String {
            format!("\\left({}\\right)", s)
        }

        fn fmt(expr: &Expression) -> String {
            match expr {
                Expression::Number(n) => number_to_string(*n),
                Expression::Binary(l, op, r) => {
                    let ls = fmt(l);
                    let rs = fmt(r);
                    match op {
                        Operator::Add => format!("{} + {}", ls, rs),
                        Operator::Sub => {
                            let rs = if binding(r) <= 1 { wrap_parens(rs) } else { rs };
                            format!("{} - {}", ls, rs)
                        }
                        Operator::Mul => {
                            let ls = if binding(l) < 2 { wrap_parens(ls) } else { ls };
                            let rs = if binding(r) < 2 { wrap_parens(rs) } else { rs };
                            format!("{} \\cdot {}", ls, rs)
                        }
                        Operator::Div => format!("\\frac{{{}}}{{{}}}", ls, rs),
                        Operator::Pow => {
                            let base = if binding(l) < 4 { wrap_parens(ls) } else { ls };
                            format!("{}^{{{}}}", base, rs)
                        }
                    }
                }
            }
        }

        fn number_to_string(n: f64) -> String {
            // Preserve integers without trailing .0, keep others as-is
            if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e18 {
                format!("{}", n.trunc() as i64)
            } else if n.is_infinite() {
                if n.is_sign_positive() {
                    String::from("\\infty")
                } else {
                    String::from("-\\infty")
                }
            } else if n.is_nan() {
                String::from("\\mathrm{NaN}")
            } else {
                format!("{}", n)
            }
        }

        fmt(self)
    }
}
