pub mod ast;
pub mod cli;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operand;
pub mod output;
pub mod parser;
pub mod validator;

pub use ast::{BinOp, Expr, Token, TokenKind};
pub use error::ParseError;
pub use evaluator::{AttributeReader, EvalError, Evaluator, evaluate_expression};
pub use lexer::{Lexer, Word};
pub use output::{to_json, to_json_pretty};
pub use parser::{Parser, parse_expression};
pub use validator::validate;
