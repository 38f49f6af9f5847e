use std::fmt;

use crate::expression::Operator;

/// A top-level token. Bracketed sub-expressions are kept as raw text and only
/// tokenized when the tree builder descends into them.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(String),
    Operator(Operator),
    Group(String),
}

impl Token {
    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Token::Operator(op) => Some(*op),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(text) | Token::Group(text) => write!(f, "{}", text),
            Token::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// Join tokens with single spaces, for diagnostics
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
