//! JSON output for expression trees.
//!
//! Trees are written as nested arrays of `[left, "op", right]`, the same
//! shape as the nested-list `Display` form of [`Expr`]. Number leaves become
//! JSON numbers and attribute leaves become JSON strings.
//!
//! # Examples
//!
//! ```
//! use attribute_calculator::parse_expression;
//! use attribute_calculator::output::to_json;
//!
//! let expr = parse_expression("a/b/c/d + 2 * 3").unwrap();
//! assert_eq!(to_json(&expr), r#"["a/b/c/d","+",[2,"*",3]]"#);
//! ```

use serde_json::{Number, Value};

use crate::ast::Expr;

/// Convert a tree to a `serde_json::Value`.
pub fn to_value(expr: &Expr) -> Value {
    match expr {
        Expr::Number(text) => number_value(text),
        Expr::Attribute(path) => Value::String(path.clone()),
        Expr::BinaryOp { op, left, right } => Value::Array(vec![
            to_value(left),
            Value::String(op.to_string()),
            to_value(right),
        ]),
    }
}

/// Number leaves keep integer form where JSON allows it. Forms JSON has no
/// literal for (`+1`, `.5`, `1.`) go through `f64`.
fn number_value(text: &str) -> Value {
    if let Ok(n) = serde_json::from_str::<Number>(text) {
        return Value::Number(n);
    }
    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(text.to_string()))
}

/// Converts a tree to compact JSON.
pub fn to_json(expr: &Expr) -> String {
    to_value(expr).to_string()
}

/// Converts a tree to JSON with 2-space indentation.
///
/// # Examples
///
/// ```
/// use attribute_calculator::parse_expression;
/// use attribute_calculator::output::to_json_pretty;
///
/// let expr = parse_expression("1 - 2").unwrap();
/// assert_eq!(to_json_pretty(&expr), "[\n  1,\n  \"-\",\n  2\n]");
/// ```
pub fn to_json_pretty(expr: &Expr) -> String {
    serde_json::to_string_pretty(&to_value(expr)).unwrap_or_else(|_| to_json(expr))
}
