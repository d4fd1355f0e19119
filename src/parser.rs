use crate::{
    ast::{BinOp, Expr, Token},
    error::ParseError,
    lexer::Lexer,
    validator::validate,
};
use std::mem;

/// Validate and parse an expression into a tree.
///
/// # Examples
///
/// ```
/// use attribute_calculator::parse_expression;
///
/// let expr = parse_expression("2 + 3 * 4").unwrap();
/// assert_eq!(expr.to_string(), "[2, '+', [3, '*', 4]]");
///
/// let expr = parse_expression("( 2 + 3 ) * sys/pwr/psu-01/current").unwrap();
/// assert_eq!(expr.to_string(), "[[2, '+', 3], '*', sys/pwr/psu-01/current]");
/// ```
pub fn parse_expression(input: &str) -> Result<Expr, ParseError> {
    validate(input)?;
    let mut parser = Parser::new(Lexer::new(input))?;
    parser.parse()
}

/// Recursive-descent parser over a lexed token stream.
///
/// The parser does not validate alternation or bracket balance itself; run
/// [`validate`] first or use [`parse_expression`]. Token shapes it cannot
/// build a tree from are still reported as [`ParseError::ParseFailure`].
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
        })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if self.current_token != expected {
            return Err(ParseError::ParseFailure(self.current_token.to_string()));
        }
        self.advance()
    }

    /// The current operator, if it sits on the given precedence tier.
    fn operator_at(&self, tier: u8) -> Option<BinOp> {
        match &self.current_token {
            Token::Operator(op) if op.precedence() == tier => Some(*op),
            _ => None,
        }
    }

    /// Parse primary expressions: a number, an attribute or a parenthesized
    /// sub-expression.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match mem::replace(&mut self.current_token, Token::Eof) {
            Token::Number(text) => {
                self.advance()?;
                Ok(Expr::Number(text))
            }
            Token::Attribute(path) => {
                self.advance()?;
                Ok(Expr::Attribute(path))
            }
            Token::LParen => {
                self.advance()?;
                let expr = self.parse_expression()?;
                self.expect(Token::RParen)?;
                Ok(expr)
            }
            token => Err(ParseError::ParseFailure(token.to_string())),
        }
    }

    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_primary()?;

        match self.operator_at(BinOp::Power.precedence()) {
            Some(op) => {
                self.advance()?;
                // Recursing on the right makes `^` right-associative
                let exponent = self.parse_power()?;
                Ok(Expr::binary(base, op, exponent))
            }
            None => Ok(base),
        }
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_power()?;

        while let Some(op) = self.operator_at(BinOp::Multiply.precedence()) {
            self.advance()?;
            let right = self.parse_power()?;
            left = Expr::binary(left, op, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;

        while let Some(op) = self.operator_at(BinOp::Add.precedence()) {
            self.advance()?;
            let right = self.parse_multiplicative()?;
            left = Expr::binary(left, op, right);
        }
        Ok(left)
    }

    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_additive()
    }

    /// Parse the whole token stream; trailing tokens are an error.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        if self.current_token == Token::Eof {
            return Err(ParseError::EmptyExpression);
        }
        let expr = self.parse_expression()?;
        self.expect(Token::Eof)?;
        Ok(expr)
    }
}
