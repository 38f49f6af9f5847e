//! Parallel evaluation of independent expressions

use log::{debug, info};
use rayon::prelude::*;

use crate::expression::Expression;
use crate::parser::{ExpressionParser, ParseError};

/// A successfully parsed and evaluated expression
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedExpression {
    pub expression: Expression,
    pub canonical: String,
    pub value: f64,
    pub depth: usize,
}

/// Outcome of one input line
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub input: String,
    pub outcome: Result<EvaluatedExpression, ParseError>,
}

impl Evaluation {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Parse and evaluate a single expression
///
/// # Errors
///
/// Returns the [`ParseError`] raised while building the tree.
pub fn evaluate_one(parser: &ExpressionParser, input: &str) -> Result<EvaluatedExpression, ParseError> {
    let expression = parser.parse(input)?;
    let canonical = expression.to_string();
    let value = expression.evaluate();
    let depth = expression.depth();
    debug!("Evaluated '{}' with tree depth {}", input, depth);
    Ok(EvaluatedExpression {
        expression,
        canonical,
        value,
        depth,
    })
}

/// Evaluate every input on the rayon pool. Results keep the input order.
pub fn evaluate_batch<S>(parser: &ExpressionParser, inputs: &[S]) -> Vec<Evaluation>
where
    S: AsRef<str> + Sync,
{
    info!("Evaluating batch of {} expressions", inputs.len());

    let results: Vec<Evaluation> = inputs
        .par_iter()
        .map(|input| {
            let input = input.as_ref();
            Evaluation {
                input: input.to_string(),
                outcome: evaluate_one(parser, input),
            }
        })
        .collect();

    let failures = results.iter().filter(|r| !r.is_ok()).count();
    info!(
        "Batch finished: {} succeeded, {} failed",
        results.len() - failures,
        failures
    );
    results
}
