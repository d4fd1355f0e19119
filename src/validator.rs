//! Syntax validation that runs before any tree is built.
//!
//! Two passes: a token pass checking that every word is legal and that
//! operands and operators alternate, then a bracket pass over the raw text.

use crate::ast::TokenKind;
use crate::error::ParseError;
use crate::lexer::words;

/// Validate an expression.
///
/// The token pass runs first and a malformed token is reported as soon as it
/// is seen. When the token pass fails on operand/operator ordering, the
/// bracket pass still runs and an unbalanced bracket is reported instead.
pub fn validate(input: &str) -> Result<(), ParseError> {
    match check_tokens(input) {
        Ok(()) => check_brackets(input),
        Err(err) if err.is_alternation_error() => {
            check_brackets(input)?;
            Err(err)
        }
        Err(err) => Err(err),
    }
}

/// Token legality, operand/operator alternation and trailing-operator check.
pub fn check_tokens(input: &str) -> Result<(), ParseError> {
    let mut expect_operand = true;
    let mut last = None;

    for word in words(input) {
        let kind = word
            .kind()
            .ok_or_else(|| ParseError::MalformedToken(word.text.to_string()))?;

        match kind {
            k if k.is_operand() && !expect_operand => {
                return Err(ParseError::UnexpectedOperand(word.text.to_string()));
            }
            TokenKind::Operator if expect_operand => {
                return Err(ParseError::UnexpectedOperator(word.text.to_string()));
            }
            TokenKind::LParen => expect_operand = true,
            TokenKind::RParen => expect_operand = false,
            _ => expect_operand = !expect_operand,
        }

        last = Some((word, kind));
    }

    match last {
        None => Err(ParseError::EmptyExpression),
        Some((word, TokenKind::Operator)) => {
            Err(ParseError::TrailingOperator(word.text.to_string()))
        }
        Some(_) => Ok(()),
    }
}

/// Bracket balance and order.
///
/// Repeatedly pairs the first remaining `(` with the first remaining `)` and
/// removes both. Positions in errors are character offsets into `input`.
pub fn check_brackets(input: &str) -> Result<(), ParseError> {
    let mut brackets: Vec<(usize, char)> = input
        .chars()
        .enumerate()
        .filter(|&(_, c)| c == '(' || c == ')')
        .collect();

    loop {
        let open = brackets.iter().position(|&(_, c)| c == '(');
        let close = brackets.iter().position(|&(_, c)| c == ')');

        match (open, close) {
            (None, None) => return Ok(()),
            (Some(open), None) => return Err(ParseError::UnbalancedOpen(brackets[open].0)),
            (None, Some(close)) => return Err(ParseError::UnbalancedClose(brackets[close].0)),
            (Some(open), Some(close)) if close < open => {
                return Err(ParseError::UnbalancedClose(brackets[close].0));
            }
            (Some(open), Some(close)) => {
                // close > open, so removing close first keeps open's index valid
                brackets.remove(close);
                brackets.remove(open);
            }
        }
    }
}
