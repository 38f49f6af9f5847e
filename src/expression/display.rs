use std::fmt;

use crate::expression::ast::Expression;

/// Fully bracketed form: every internal node is wrapped in its own parentheses,
/// so the output re-parses to the same tree shape.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Number(n) => write!(f, "{}", n),
            Expression::Binary(l, op, r) => write!(f, "({} {} {})", l, op, r),
        }
    }
}

/// Render a tree in canonical form
pub fn stringify(expression: &Expression) -> String {
    expression.to_string()
}
