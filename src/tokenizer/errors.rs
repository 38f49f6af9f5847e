use thiserror::Error;

use crate::utils::BracketError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenizeError {
    #[error("Unexpected character '{found}' at position {position} in \"{input}\"")]
    MalformedInput {
        position: usize,
        found: char,
        input: String,
    },
    #[error(transparent)]
    Bracket(#[from] BracketError),
}
