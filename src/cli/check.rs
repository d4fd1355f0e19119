//! Validate expressions and print their trees

use super::CliError;
use crate::output::{to_json, to_json_pretty};
use crate::parse_expression;

/// How `attrcalc tree` renders a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeFormat {
    /// Nested list, e.g. `[2, '+', [3, '*', 4]]`
    #[default]
    List,
    /// Compact JSON arrays
    Json,
    /// Indented JSON arrays
    JsonPretty,
}

/// Options for the tree command
#[derive(Debug, Clone, Default)]
pub struct TreeOptions {
    /// The expression to parse
    pub expression: String,
    /// Output format
    pub format: TreeFormat,
}

/// Check syntax. The tree is built and dropped, so shapes that pass
/// validation but cannot be placed in a tree are rejected too.
pub fn execute_check(expression: &str) -> Result<(), CliError> {
    parse_expression(expression)?;
    Ok(())
}

/// Parse an expression and render its tree
pub fn execute_tree(options: &TreeOptions) -> Result<String, CliError> {
    let expr = parse_expression(&options.expression)?;

    let rendered = match options.format {
        TreeFormat::List => expr.to_string(),
        TreeFormat::Json => to_json(&expr),
        TreeFormat::JsonPretty => to_json_pretty(&expr),
    };
    Ok(rendered)
}
