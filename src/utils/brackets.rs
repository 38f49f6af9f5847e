use log::{debug, warn};

use crate::utils::errors::BracketError;

/// Return the leading balanced group of `text`, outer parentheses included.
///
/// # Errors
///
/// Returns [`BracketError::NotABracketExpression`] when `text` does not start with `(`,
/// and [`BracketError::UnbalancedBrackets`] when the opening bracket is never closed.
pub fn bracket_group(text: &str) -> Result<&str, BracketError> {
    debug!("Scanning bracket group in '{}'", text);

    if !text.starts_with('(') {
        warn!("Bracket scan requested on '{}'", text);
        return Err(BracketError::NotABracketExpression(text.to_string()));
    }

    let mut depth: usize = 0;
    for (idx, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => continue,
        }

        if depth == 0 {
            let group = &text[..=idx];
            debug!("Found bracket group '{}'", group);
            return Ok(group);
        }
    }

    debug!("Bracket group never closed, depth {} at end of input", depth);
    Err(BracketError::UnbalancedBrackets(text.to_string()))
}

/// Strip one pair of enclosing parentheses, if present.
pub fn strip_outer(group: &str) -> &str {
    group
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(group)
}
