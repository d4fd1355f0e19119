//! Operand recognition: decides what kind of token a piece of text is.
//!
//! Attribute paths follow the control system naming scheme: three device
//! segments and an attribute segment, separated by `/`, e.g.
//! `r3-a110311cab01/mag/psia-01/current`. All checks match the entire text.

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::{BinOp, TokenKind};

/// Characters allowed as the first character of a path segment.
const SEGMENT_START: &str = "a-zA-Z0-9-";

/// Characters never allowed inside a path segment.
const SEGMENT_FORBIDDEN: &str = " /()";

static ATTRIBUTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let segment = format!("[{SEGMENT_START}][^{SEGMENT_FORBIDDEN}]*");
    Regex::new(&format!(r"\A{segment}/{segment}/{segment}/{segment}\z"))
        .expect("attribute path pattern is a valid regex")
});

/// True if `text` is a complete four-segment attribute path.
///
/// # Examples
///
/// ```
/// use attribute_calculator::operand::is_attribute;
///
/// assert!(is_attribute("sys/pwr/psu-01/current"));
/// assert!(!is_attribute("sys/pwr/current"));
/// assert!(!is_attribute("sys/pwr/psu-01/current/"));
/// ```
pub fn is_attribute(text: &str) -> bool {
    ATTRIBUTE_PATTERN.is_match(text)
}

/// True if `text` is a decimal floating-point literal.
///
/// Accepts an optional sign, digits with an optional fraction, and an optional
/// exponent. Named values such as `inf` or `nan` are not numbers here.
pub fn is_number(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        && text.parse::<f64>().is_ok()
}

pub fn is_operator(text: &str) -> bool {
    BinOp::from_symbol(text).is_some()
}

/// Classify a token body with any attached bracket already stripped.
///
/// Returns `None` when the text matches no category.
pub fn classify(text: &str) -> Option<TokenKind> {
    match text {
        "(" => Some(TokenKind::LParen),
        ")" => Some(TokenKind::RParen),
        _ if is_operator(text) => Some(TokenKind::Operator),
        _ if is_number(text) => Some(TokenKind::Number),
        _ if is_attribute(text) => Some(TokenKind::Attribute),
        _ => None,
    }
}
