//! Top-level tokenization

mod core;
mod errors;
mod token;

pub use self::core::tokenize;
pub use errors::TokenizeError;
pub use token::{Token, format_tokens};

#[cfg(test)]
mod tests;
