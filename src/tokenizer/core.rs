use log::debug;

use crate::expression::Operator;
use crate::tokenizer::errors::TokenizeError;
use crate::tokenizer::token::Token;
use crate::utils::{bracket_group, number_prefix_len};

/// Split `text` into top-level tokens, left to right, without looking inside
/// bracketed groups.
///
/// Empty input yields an empty vector.
///
/// # Errors
///
/// Returns [`TokenizeError::MalformedInput`] on any character that cannot start a
/// token, and [`TokenizeError::Bracket`] when a group is never closed.
pub fn tokenize(text: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(c) = text[pos..].chars().next() {
        let rest = &text[pos..];

        if c.is_whitespace() {
            pos += c.len_utf8();
            continue;
        }

        if let Some(op) = Operator::from_symbol(c) {
            tokens.push(Token::Operator(op));
            pos += 1;
            continue;
        }

        if c == '(' {
            let group = bracket_group(rest)?;
            tokens.push(Token::Group(group.to_string()));
            pos += group.len();
            continue;
        }

        let len = number_prefix_len(rest);
        if len > 0 {
            tokens.push(Token::Number(rest[..len].to_string()));
            pos += len;
            continue;
        }

        debug!("Unexpected character '{}' at {} in '{}'", c, pos, text);
        return Err(TokenizeError::MalformedInput {
            position: pos,
            found: c,
            input: text.to_string(),
        });
    }

    debug!("Tokenized '{}' into {} tokens", text, tokens.len());
    Ok(tokens)
}
