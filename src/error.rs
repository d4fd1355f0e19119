//! Syntax errors raised while validating or parsing an expression.

/// Errors that can occur while validating or parsing an expression.
///
/// Every variant carries the offending token text or the zero-based character
/// position of the offending bracket.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Token is neither a number, an attribute, an operator nor a bracket
    #[error("invalid input in '{0}'")]
    MalformedToken(String),

    /// Operand found where an operator was expected
    #[error("'{0}' was expected to be an operator, but is an operand")]
    UnexpectedOperand(String),

    /// Operator found where an operand was expected
    #[error("'{0}' was expected to be an operand, but is an operator")]
    UnexpectedOperator(String),

    /// Expression ends on an operator
    #[error("final token of expression is an operator: '{0}'")]
    TrailingOperator(String),

    /// `(` that is never closed
    #[error("opening bracket at position {0} is opened but never closed")]
    UnbalancedOpen(usize),

    /// `)` that was never opened
    #[error("closing bracket at position {0} is closed but never opened")]
    UnbalancedClose(usize),

    /// Token stream has a shape the parser cannot build a tree from
    #[error("unexpected '{0}' while building expression tree")]
    ParseFailure(String),

    /// Input holds no tokens at all
    #[error("expression is empty")]
    EmptyExpression,
}

impl ParseError {
    /// Operand/operator ordering errors, which a bracket error outranks.
    pub fn is_alternation_error(&self) -> bool {
        matches!(
            self,
            ParseError::UnexpectedOperand(_)
                | ParseError::UnexpectedOperator(_)
                | ParseError::TrailingOperator(_)
        )
    }
}
