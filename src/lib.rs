//! exprtree - parse arithmetic expressions into binary syntax trees and evaluate them
//!
//! The pipeline runs strictly forward: text is split into top-level tokens, the
//! tokens are folded into an [`Expression`] tree around the loosest operator at
//! each level, and the tree is evaluated or rendered in fully bracketed form.

pub mod batch;
pub mod expression;
pub mod parser;
pub mod tokenizer;
pub mod utils;

// Re-export the main public API
pub use batch::{EvaluatedExpression, Evaluation, evaluate_batch, evaluate_one};
pub use expression::{Expression, Operator, evaluate, stringify};
pub use parser::{ErrorKind, ExpressionParser, ParseError, parse};
pub use tokenizer::{Token, TokenizeError, tokenize};
pub use utils::{BracketError, bracket_group};

/// Parse `text` and evaluate the resulting tree
///
/// # Errors
///
/// This function will return an error if:
/// * The input contains a character that cannot start a token
/// * A bracket group is never closed
/// * The input, or any bracket group inside it, is empty or lacks an operand
/// * Two operands are adjacent with no operator between them
///
/// # Examples
///
/// ```
/// use exprtree::{evaluate_string, parse};
///
/// assert_eq!(evaluate_string("1 + 2 + 3").ok(), Some(6.0));
///
/// let tree = parse("1 + 4 - 2 * (3.0 - 2) - 1").map(|t| t.to_string());
/// assert_eq!(tree.ok().as_deref(), Some("(((1 + 4) - (2 * (3 - 2))) - 1)"));
/// ```
pub fn evaluate_string(text: &str) -> Result<f64, ParseError> {
    Ok(parse(text)?.evaluate())
}
