use log::{debug, trace};

use crate::expression::ast::Expression;

impl Expression {
    /// Compute the value of the tree, left operand before right.
    ///
    /// Division by zero and other IEEE edge cases produce infinity or NaN
    /// rather than an error.
    pub fn evaluate(&self) -> f64 {
        match self {
            Expression::Number(n) => *n,
            Expression::Binary(l, op, r) => {
                let left = l.evaluate();
                let right = r.evaluate();
                let value = op.apply(left, right);
                trace!("{} {} {} = {}", left, op, right, value);
                if !value.is_finite() {
                    debug!("Non-finite result from {} {} {}: {}", left, op, right, value);
                }
                value
            }
        }
    }
}

/// Evaluate a tree to a number
pub fn evaluate(expression: &Expression) -> f64 {
    let value = expression.evaluate();
    debug!("Expression {} evaluated to {}", expression, value);
    value
}
