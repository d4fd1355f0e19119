//! # Attribute Calculator - Abstract Syntax Tree
//!
//! This module defines the tokens and tree nodes for attribute calculator
//! expressions: plain arithmetic over numeric literals and remote instrument
//! attributes addressed by a four-segment path.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[operators]** - The five binary operators and their precedence tiers
//! - **[expressions]** - Expression tree nodes (leaves and binary operations)
//!
//! ## Quick Start
//!
//! ```text
//! ( sys/pwr/psu-01/current + 1.5 ) * 2
//! ```
//!
//! This expression reads the `current` attribute of device `sys/pwr/psu-01`,
//! adds 1.5 and doubles the result.
//!
//! ## Core Concepts
//!
//! ### Operands
//!
//! - **Numbers** in decimal notation: `2`, `-0.5`, `1e-3`
//! - **Attributes** as four slash-separated segments: `domain/family/member/attribute`
//!
//! ### Precedence Tiers
//!
//! Tightest first:
//!
//! - `^` - exponentiation, right-associative
//! - `*` `/` - multiplication and division, left-associative
//! - `+` `-` - addition and subtraction, left-associative
//!
//! ### Tree Shape
//!
//! The tree carries no grouping metadata. Parentheses and precedence are
//! encoded only by nesting, so a node can be reduced as soon as both of its
//! children have been.
//!
//! ## Examples
//!
//! ```text
//! 2 + 3 * 4          =>  [2, '+', [3, '*', 4]]
//! ( 2 + 3 ) * 4      =>  [[2, '+', 3], '*', 4]
//! a/b/c/d ^ 2 ^ 3    =>  [a/b/c/d, '^', [2, '^', 3]]
//! ```
pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::Expr;
pub use operators::BinOp;
pub use tokens::{Token, TokenKind};
