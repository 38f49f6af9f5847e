use crate::expression::operator::Operator;

/// Binary syntax tree for an arithmetic expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Binary(Box<Expression>, Operator, Box<Expression>),
}

impl Expression {
    pub fn binary(left: Expression, op: Operator, right: Expression) -> Self {
        Expression::Binary(Box::new(left), op, Box::new(right))
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        match self {
            Expression::Number(_) => 1,
            Expression::Binary(l, _, r) => 1 + l.depth().max(r.depth()),
        }
    }
}
