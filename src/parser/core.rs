use log::{debug, trace, warn};

use crate::expression::{Expression, Operator};
use crate::parser::constants::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_TREE_DEPTH};
use crate::parser::errors::ParseError;
use crate::tokenizer::{Token, format_tokens, tokenize};
use crate::utils::{literal_to_number, strip_outer};

/// Builds expression trees from text or token sequences
#[derive(Debug, Clone)]
pub struct ExpressionParser {
    max_depth: usize,
    max_tree_depth: usize,
}

impl Default for ExpressionParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionParser {
    /// Create a parser with the default limits
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_tree_depth: DEFAULT_MAX_TREE_DEPTH,
        }
    }

    /// Create a parser that rejects brackets nested deeper than `max_depth`
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::new()
        }
    }

    /// Limit the number of operators on any root-to-leaf path of the tree
    pub fn max_tree_depth(mut self, max_tree_depth: usize) -> Self {
        self.max_tree_depth = max_tree_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn tree_depth_limit(&self) -> usize {
        self.max_tree_depth
    }

    /// Tokenize `text` and fold the tokens into a tree.
    ///
    /// # Errors
    ///
    /// Propagates tokenizer failures and every tree-building failure described
    /// on [`ParseError`]. No partial tree is returned.
    pub fn parse(&self, text: &str) -> Result<Expression, ParseError> {
        debug!("Parsing '{}'", text);
        let tokens = tokenize(text)?;
        self.build(&tokens)
    }

    /// Fold an already tokenized sequence into a tree.
    ///
    /// # Errors
    ///
    /// See [`ExpressionParser::parse`].
    pub fn build(&self, tokens: &[Token]) -> Result<Expression, ParseError> {
        self.build_at(tokens, 0, 0)
    }

    /// `nesting` counts bracket descents, `splits` counts operators above this slice.
    fn build_at(
        &self,
        tokens: &[Token],
        nesting: usize,
        splits: usize,
    ) -> Result<Expression, ParseError> {
        if nesting > self.max_depth {
            warn!("Nesting limit of {} exceeded", self.max_depth);
            return Err(ParseError::RecursionLimitExceeded {
                limit: self.max_depth,
            });
        }
        if splits > self.max_tree_depth {
            warn!("Tree depth limit of {} exceeded", self.max_tree_depth);
            return Err(ParseError::TreeDepthExceeded {
                limit: self.max_tree_depth,
            });
        }

        match tokens {
            [] => Err(ParseError::EmptyExpression),
            [Token::Group(group)] => {
                trace!("Descending into group '{}'", group);
                let inner = tokenize(strip_outer(group))?;
                self.build_at(&inner, nesting + 1, splits)
            }
            [Token::Number(literal)] => literal_to_number(literal)
                .map(Expression::Number)
                .ok_or_else(|| ParseError::NumberFormat(literal.clone())),
            [Token::Operator(op)] => Err(ParseError::NoOperatorFound(op.to_string())),
            _ => {
                let (idx, op) = split_point(tokens)
                    .ok_or_else(|| ParseError::NoOperatorFound(format_tokens(tokens)))?;
                trace!("Splitting '{}' at '{}' (index {})", format_tokens(tokens), op, idx);

                let left = self.build_at(&tokens[..idx], nesting, splits + 1)?;
                let right = self.build_at(&tokens[idx + 1..], nesting, splits + 1)?;
                Ok(Expression::binary(left, op, right))
            }
        }
    }
}

/// Find the operator that becomes the root of `tokens`.
///
/// Scans right to left and only moves to an operator of strictly greater rank, so
/// the result is the rightmost occurrence of the loosest operator present.
pub fn split_point(tokens: &[Token]) -> Option<(usize, Operator)> {
    let mut best: Option<(usize, Operator)> = None;

    for (idx, token) in tokens.iter().enumerate().rev() {
        let Some(op) = token.as_operator() else {
            continue;
        };
        match best {
            Some((_, current)) if op.precedence_rank() <= current.precedence_rank() => {}
            _ => best = Some((idx, op)),
        }
    }

    best
}

/// Parse `text` with the default parser
///
/// # Errors
///
/// See [`ExpressionParser::parse`].
pub fn parse(text: &str) -> Result<Expression, ParseError> {
    ExpressionParser::new().parse(text)
}
