use thiserror::Error;

use crate::tokenizer::TokenizeError;
use crate::utils::BracketError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error("Expression wasn't valid, empty list attained")]
    EmptyExpression,
    #[error("Expression wasn't valid, no operators found in subexpression \"{0}\"")]
    NoOperatorFound(String),
    #[error("Invalid number literal: {0}")]
    NumberFormat(String),
    #[error("Expression nested deeper than the limit of {limit}")]
    RecursionLimitExceeded { limit: usize },
    #[error("Expression chains more than {limit} operators on one path")]
    TreeDepthExceeded { limit: usize },
}

/// Flat classification of every failure the pipeline can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedInput,
    UnbalancedBrackets,
    NotABracketExpression,
    EmptyExpression,
    NoOperatorFound,
    NumberFormatError,
    RecursionLimitExceeded,
    TreeDepthExceeded,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Tokenize(TokenizeError::MalformedInput { .. }) => ErrorKind::MalformedInput,
            ParseError::Tokenize(TokenizeError::Bracket(BracketError::UnbalancedBrackets(_))) => {
                ErrorKind::UnbalancedBrackets
            }
            ParseError::Tokenize(TokenizeError::Bracket(BracketError::NotABracketExpression(
                _,
            ))) => ErrorKind::NotABracketExpression,
            ParseError::EmptyExpression => ErrorKind::EmptyExpression,
            ParseError::NoOperatorFound(_) => ErrorKind::NoOperatorFound,
            ParseError::NumberFormat(_) => ErrorKind::NumberFormatError,
            ParseError::RecursionLimitExceeded { .. } => ErrorKind::RecursionLimitExceeded,
            ParseError::TreeDepthExceeded { .. } => ErrorKind::TreeDepthExceeded,
        }
    }
}
