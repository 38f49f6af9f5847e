use std::fmt;

/// The five supported binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    /// All operators, tightest binding first
    pub const ALL: [Operator; 5] = [
        Operator::Pow,
        Operator::Mul,
        Operator::Div,
        Operator::Add,
        Operator::Sub,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        Operator::ALL.into_iter().find(|op| op.symbol() == c)
    }

    /// Lower rank binds tighter. The loosest operator present becomes the tree root.
    pub fn precedence_rank(self) -> u8 {
        match self {
            Operator::Pow => 0,
            Operator::Mul => 1,
            Operator::Div => 2,
            Operator::Add => 3,
            Operator::Sub => 4,
        }
    }

    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => left / right,
            Operator::Pow => left.powf(right),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
