use pretty_assertions::assert_eq;

use crate::expression::Operator;
use crate::tokenizer::{Token, TokenizeError, format_tokens, tokenize};
use crate::utils::BracketError;

fn number(text: &str) -> Token {
    Token::Number(text.to_string())
}

#[test]
fn test_tokenize_mixed_expression() {
    let tokens = tokenize("1 + 2 - 35 / (7 * 5)");
    assert_eq!(
        tokens,
        Ok(vec![
            number("1"),
            Token::Operator(Operator::Add),
            number("2"),
            Token::Operator(Operator::Sub),
            number("35"),
            Token::Operator(Operator::Div),
            Token::Group("(7 * 5)".to_string()),
        ])
    );
}

#[test]
fn test_tokenize_does_not_descend_into_groups() {
    let tokens = tokenize("((1 + 2) * 3)^2");
    assert_eq!(
        tokens,
        Ok(vec![
            Token::Group("((1 + 2) * 3)".to_string()),
            Token::Operator(Operator::Pow),
            number("2"),
        ])
    );
}

#[test]
fn test_tokenize_whitespace_is_insignificant() {
    let spaced = tokenize("  3.5 *\t( 2 )  ");
    let tight = tokenize("3.5*(2)");
    assert_eq!(
        spaced,
        Ok(vec![
            number("3.5"),
            Token::Operator(Operator::Mul),
            Token::Group("( 2 )".to_string()),
        ])
    );
    assert_eq!(format_tokens(&tight.unwrap_or_default()), "3.5 * (2)");
}

#[test]
fn test_tokenize_empty_input() {
    assert_eq!(tokenize(""), Ok(vec![]));
    assert_eq!(tokenize("   "), Ok(vec![]));
}

#[test]
fn test_tokenize_adjacent_numbers() {
    assert_eq!(tokenize("1 2"), Ok(vec![number("1"), number("2")]));
}

#[test]
fn test_tokenize_malformed_character() {
    let result = tokenize("1 & 2");
    assert_eq!(
        result,
        Err(TokenizeError::MalformedInput {
            position: 2,
            found: '&',
            input: "1 & 2".to_string(),
        })
    );
}

#[test]
fn test_tokenize_rejects_identifiers_and_stray_closing_bracket() {
    assert!(matches!(
        tokenize("2 * x"),
        Err(TokenizeError::MalformedInput { found: 'x', .. })
    ));
    assert!(matches!(
        tokenize("1 + 2)"),
        Err(TokenizeError::MalformedInput { found: ')', position: 5, .. })
    ));
}

#[test]
fn test_tokenize_trailing_dot_is_malformed() {
    assert!(matches!(
        tokenize("1. + 2"),
        Err(TokenizeError::MalformedInput { found: '.', position: 1, .. })
    ));
}

#[test]
fn test_tokenize_position_is_byte_offset() {
    assert!(matches!(
        tokenize("π + 1"),
        Err(TokenizeError::MalformedInput { found: 'π', position: 0, .. })
    ));
    assert!(matches!(
        tokenize("1 × 2"),
        Err(TokenizeError::MalformedInput { found: '×', position: 2, .. })
    ));
}

#[test]
fn test_tokenize_unbalanced_group() {
    let result = tokenize("1 + (");
    assert_eq!(
        result,
        Err(TokenizeError::Bracket(BracketError::UnbalancedBrackets(
            "(".to_string()
        )))
    );
}
