use thiserror::Error;

/// Errors raised while extracting a parenthesised group
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BracketError {
    #[error("String \"{0}\" doesn't begin with a bracket expression")]
    NotABracketExpression(String),
    #[error("String \"{0}\" doesn't begin with a well bracketed expression, missing closing bracket")]
    UnbalancedBrackets(String),
}
