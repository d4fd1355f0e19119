use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use rust_decimal::{Decimal, prelude::FromPrimitive, prelude::ToPrimitive};

use crate::{
    ast::{BinOp, Expr},
    error::ParseError,
    parser::parse_expression,
};

/// Source of live attribute values.
///
/// This is the seam to the control system: the evaluator never talks to
/// devices itself, it asks a reader for each attribute leaf it meets.
pub trait AttributeReader {
    /// Read the current scalar value of the attribute at `path`.
    fn read(&self, path: &str) -> Result<f64, EvalError>;
}

impl<S: BuildHasher> AttributeReader for HashMap<String, f64, S> {
    fn read(&self, path: &str) -> Result<f64, EvalError> {
        self.get(path)
            .copied()
            .ok_or_else(|| EvalError::UnknownAttribute(path.to_string()))
    }
}

impl AttributeReader for BTreeMap<String, f64> {
    fn read(&self, path: &str) -> Result<f64, EvalError> {
        self.get(path)
            .copied()
            .ok_or_else(|| EvalError::UnknownAttribute(path.to_string()))
    }
}

impl<R: AttributeReader + ?Sized> AttributeReader for &R {
    fn read(&self, path: &str) -> Result<f64, EvalError> {
        (**self).read(path)
    }
}

/// Errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// The reader has no value for this attribute
    #[error("attribute '{0}' is not available")]
    UnknownAttribute(String),

    /// The reader knows the attribute but could not read it
    #[error("could not read attribute '{path}': {reason}")]
    ReadFailed { path: String, reason: String },

    /// A number leaf that does not parse to a finite value
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    /// Division by zero
    #[error("division by zero")]
    DivisionByZero,

    /// The reader returned infinity or NaN
    #[error("attribute '{path}' has no finite value ({value})")]
    NonFiniteAttribute { path: String, value: f64 },

    /// Operation produced infinity or NaN
    #[error("{left} {op} {right} does not produce a finite value")]
    NonFinite { op: BinOp, left: f64, right: f64 },

    /// Expression failed to parse
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Reduces an expression tree to a single value.
///
/// Leaves are resolved first: numbers parse from their text, attributes are
/// read through the [`AttributeReader`]. Each binary node is then reduced
/// once both children have values.
pub struct Evaluator<R> {
    reader: R,
}

impl<R: AttributeReader> Evaluator<R> {
    pub fn new(reader: R) -> Self {
        Evaluator { reader }
    }

    /// Evaluates an expression tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use attribute_calculator::{Evaluator, parse_expression};
    /// use std::collections::HashMap;
    ///
    /// let mut values = HashMap::new();
    /// values.insert("sys/pwr/psu-01/current".to_string(), 2.5);
    ///
    /// let expr = parse_expression("sys/pwr/psu-01/current * 4").unwrap();
    /// let result = Evaluator::new(&values).evaluate(&expr).unwrap();
    /// assert_eq!(result, 10.0);
    /// ```
    pub fn evaluate(&self, expr: &Expr) -> Result<f64, EvalError> {
        let value = self.eval_expr(expr)?;
        tracing::trace!(target: "eval", %expr, value, "evaluated expression");
        Ok(value)
    }

    fn eval_expr(&self, expr: &Expr) -> Result<f64, EvalError> {
        match expr {
            Expr::Number(text) => text
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| EvalError::InvalidNumber(text.clone())),
            Expr::Attribute(path) => {
                let value = self.reader.read(path)?;
                tracing::debug!(target: "eval", path = %path, value, "read attribute");
                if !value.is_finite() {
                    return Err(EvalError::NonFiniteAttribute {
                        path: path.clone(),
                        value,
                    });
                }
                Ok(value)
            }
            Expr::BinaryOp { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                apply_binop(*op, left, right)
            }
        }
    }
}

/// Parse and evaluate in one step.
pub fn evaluate_expression<R: AttributeReader>(input: &str, reader: R) -> Result<f64, EvalError> {
    let expr = parse_expression(input)?;
    Evaluator::new(reader).evaluate(&expr)
}

/// Apply one operator to two resolved operands.
pub fn apply_binop(op: BinOp, left: f64, right: f64) -> Result<f64, EvalError> {
    if op == BinOp::Divide && right == 0.0 {
        return Err(EvalError::DivisionByZero);
    }

    let result = match op {
        BinOp::Power => left.powf(right),
        _ => decimal_binop(op, left, right).unwrap_or_else(|| float_binop(op, left, right)),
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(EvalError::NonFinite { op, left, right })
    }
}

/// Exact decimal arithmetic, so that e.g. `0.1 + 0.2` is `0.3`. `None` when
/// an operand or the result does not fit a `Decimal`.
fn decimal_binop(op: BinOp, left: f64, right: f64) -> Option<f64> {
    let a = to_decimal(left)?;
    let b = to_decimal(right)?;

    let result = match op {
        BinOp::Add => a.checked_add(b)?,
        BinOp::Subtract => a.checked_sub(b)?,
        BinOp::Multiply => a.checked_mul(b)?,
        BinOp::Divide => a.checked_div(b)?,
        BinOp::Power => return None,
    };
    result.to_f64()
}

/// Converts only when the value survives the round trip; tiny magnitudes
/// would otherwise collapse to zero.
fn to_decimal(value: f64) -> Option<Decimal> {
    let d = Decimal::from_f64(value)?;
    (d.to_f64() == Some(value)).then_some(d)
}

fn float_binop(op: BinOp, left: f64, right: f64) -> f64 {
    match op {
        BinOp::Add => left + right,
        BinOp::Subtract => left - right,
        BinOp::Multiply => left * right,
        BinOp::Divide => left / right,
        BinOp::Power => left.powf(right),
    }
}
