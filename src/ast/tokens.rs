use std::fmt;

use crate::ast::BinOp;

/// Category of a token body, as decided by the operand recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Decimal numeric literal
    Number,
    /// Four-segment attribute path
    Attribute,
    /// One of `^ * / + -`
    Operator,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl TokenKind {
    /// Numbers and attributes are operands.
    pub fn is_operand(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Attribute)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Operands
    /// Numeric literal, kept as written
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// -1.0
    /// 2e-3
    /// ```
    Number(String),

    /// Remote attribute reference
    ///
    /// Four segments separated by `/`. Each segment starts with a letter,
    /// digit or `-` and may not contain spaces, slashes or parentheses.
    ///
    /// # Examples
    /// ```text
    /// sys/pwr/psu-01/current
    /// r3-a110311cab01/mag/psia-01/current
    /// ```
    Attribute(String),

    // Operators
    /// Binary operator (`^`, `*`, `/`, `+`, `-`)
    Operator(BinOp),

    // Delimiters
    /// Left parenthesis `(`
    LParen,

    /// Right parenthesis `)`
    RParen,

    /// End of input
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) | Token::Attribute(text) => write!(f, "{text}"),
            Token::Operator(op) => write!(f, "{op}"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Eof => write!(f, "end of input"),
        }
    }
}
