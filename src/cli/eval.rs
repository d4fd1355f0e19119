//! Evaluate expressions against attribute values given as JSON

use std::collections::BTreeMap;

use super::{CliError, values_from_json};
use crate::{Evaluator, parse_expression};

/// Options for the eval command
#[derive(Debug, Clone, Default)]
pub struct EvalOptions {
    /// The expression to evaluate
    pub expression: String,
    /// JSON object of attribute values
    pub values: Option<String>,
}

/// Parse and evaluate an expression.
///
/// Values are only required when the expression references attributes.
pub fn execute_eval(options: &EvalOptions) -> Result<f64, CliError> {
    let expr = parse_expression(&options.expression)?;

    let values = match &options.values {
        Some(json) => values_from_json(json)?,
        None if expr.attributes().is_empty() => BTreeMap::new(),
        None => return Err(CliError::NoInput),
    };

    tracing::debug!(
        attributes = expr.attributes().len(),
        provided = values.len(),
        "evaluating expression"
    );

    let value = Evaluator::new(values).evaluate(&expr)?;
    Ok(value)
}
