//! CLI support for the attribute calculator
//!
//! Provides programmatic access to the `attrcalc` commands so a hosting
//! device server can reuse them for its command-response channel.

mod check;
mod convert;
mod docs;
mod eval;

pub use check::{TreeFormat, TreeOptions, execute_check, execute_tree};
pub use convert::values_from_json;
pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use eval::{EvalOptions, execute_eval};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Syntax error in the expression
    #[error("Syntax error: {0}")]
    Parse(#[from] crate::ParseError),
    /// Evaluation error
    #[error("Evaluation error: {0}")]
    Eval(#[from] crate::EvalError),
    /// Attribute values are not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Attribute values JSON has the wrong shape
    #[error("Invalid attribute values: {0}")]
    InvalidValues(String),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Expression references attributes but no values were given
    #[error("No attribute values provided. Use --values or pipe a JSON object to stdin.")]
    NoInput,
    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'attrcalc docs' to see available categories.")]
    UnknownCategory(String),
}
