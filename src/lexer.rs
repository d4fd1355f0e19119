use std::collections::VecDeque;
use std::str::SplitWhitespace;

use crate::ast::{BinOp, Token, TokenKind};
use crate::error::ParseError;
use crate::operand::classify;

/// One whitespace-delimited word of the input.
///
/// A bracket written directly against an operand, as in `(2` or `a/b/c/d)`,
/// is split off for classification. At most one leading `(` and one trailing
/// `)` are split off, and only while more than one character remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    /// The word exactly as written
    pub text: &'a str,
    /// The word without its attached brackets
    pub body: &'a str,
    pub leading_paren: bool,
    pub trailing_paren: bool,
}

impl<'a> Word<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut body = text;

        let leading_paren = body.len() > 1 && body.starts_with('(');
        if leading_paren {
            body = &body[1..];
        }

        let trailing_paren = body.len() > 1 && body.ends_with(')');
        if trailing_paren {
            body = &body[..body.len() - 1];
        }

        Word {
            text,
            body,
            leading_paren,
            trailing_paren,
        }
    }

    /// Category of the body, `None` if it matches nothing.
    pub fn kind(&self) -> Option<TokenKind> {
        classify(self.body)
    }

    /// The token for the body alone.
    pub fn body_token(&self) -> Result<Token, ParseError> {
        let token = match self.kind() {
            Some(TokenKind::Number) => Token::Number(self.body.to_string()),
            Some(TokenKind::Attribute) => Token::Attribute(self.body.to_string()),
            Some(TokenKind::Operator) => match BinOp::from_symbol(self.body) {
                Some(op) => Token::Operator(op),
                None => return Err(self.malformed()),
            },
            Some(TokenKind::LParen) => Token::LParen,
            Some(TokenKind::RParen) => Token::RParen,
            None => return Err(self.malformed()),
        };
        Ok(token)
    }

    fn malformed(&self) -> ParseError {
        ParseError::MalformedToken(self.text.to_string())
    }
}

/// Split an expression into words.
pub fn words(input: &str) -> impl Iterator<Item = Word<'_>> {
    input.split_whitespace().map(Word::new)
}

/// Turns an expression into a flat token stream, with attached brackets
/// emitted as tokens of their own.
pub struct Lexer<'a> {
    words: SplitWhitespace<'a>,
    pending: VecDeque<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            words: input.split_whitespace(),
            pending: VecDeque::new(),
        }
    }

    /// Next token, or [`Token::Eof`] once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        if let Some(token) = self.pending.pop_front() {
            return Ok(token);
        }

        let Some(text) = self.words.next() else {
            return Ok(Token::Eof);
        };

        let word = Word::new(text);
        let body = word.body_token()?;

        if word.leading_paren {
            self.pending.push_back(body);
            if word.trailing_paren {
                self.pending.push_back(Token::RParen);
            }
            return Ok(Token::LParen);
        }

        if word.trailing_paren {
            self.pending.push_back(Token::RParen);
        }
        Ok(body)
    }

    /// Collect every token up to, but not including, [`Token::Eof`].
    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            match self.next_token()? {
                Token::Eof => return Ok(tokens),
                token => tokens.push(token),
            }
        }
    }
}
