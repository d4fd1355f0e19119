// tests/evaluator_tests.rs

use attribute_calculator::{
    AttributeReader, BinOp, EvalError, Evaluator, ParseError, evaluate_expression,
    evaluator::apply_binop, parse_expression,
};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

fn values(pairs: Vec<(&str, f64)>) -> HashMap<String, f64> {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

fn eval(input: &str, reader: &HashMap<String, f64>) -> Result<f64, EvalError> {
    evaluate_expression(input, reader)
}

/// Records every read, to check how leaves are resolved.
struct RecordingReader {
    values: HashMap<String, f64>,
    reads: RefCell<Vec<String>>,
}

impl AttributeReader for RecordingReader {
    fn read(&self, path: &str) -> Result<f64, EvalError> {
        self.reads.borrow_mut().push(path.to_string());
        self.values.read(path)
    }
}

/// Fails every read, like a device that is offline.
struct OfflineReader;

impl AttributeReader for OfflineReader {
    fn read(&self, path: &str) -> Result<f64, EvalError> {
        Err(EvalError::ReadFailed {
            path: path.to_string(),
            reason: "device is offline".to_string(),
        })
    }
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_number_arithmetic() {
    let none = values(vec![]);
    assert_eq!(eval("2 + 3 * 4", &none).unwrap(), 14.0);
    assert_eq!(eval("( 2 + 3 ) * 4", &none).unwrap(), 20.0);
    assert_eq!(eval("8 - 4 - 2", &none).unwrap(), 2.0);
    assert_eq!(eval("8 / 4 * 2", &none).unwrap(), 4.0);
    assert_eq!(eval("2 ^ 3 ^ 2", &none).unwrap(), 512.0);
    assert_eq!(eval("( 2 ^ 3 ) ^ 2", &none).unwrap(), 64.0);
}

#[test]
fn test_number_forms() {
    let none = values(vec![]);
    assert_eq!(eval("-1.5 + .5", &none).unwrap(), -1.0);
    assert_eq!(eval("1e3 / 4", &none).unwrap(), 250.0);
    assert_eq!(eval("+2 * 2", &none).unwrap(), 4.0);
}

#[test]
fn test_decimal_addition_is_exact() {
    let none = values(vec![]);
    assert_eq!(eval("0.1 + 0.2", &none).unwrap(), 0.3);
}

#[test]
fn test_fractional_power() {
    let none = values(vec![]);
    assert_eq!(eval("16 ^ 0.5", &none).unwrap(), 4.0);
}

// ============================================================================
// Attributes
// ============================================================================

#[test]
fn test_attribute_values() {
    let reader = values(vec![
        ("sys/pwr/psu-01/current", 2.5),
        ("sys/pwr/psu-01/voltage", 12.0),
    ]);
    assert_eq!(
        eval("sys/pwr/psu-01/current * sys/pwr/psu-01/voltage", &reader).unwrap(),
        30.0
    );
}

#[test]
fn test_btree_reader() {
    let mut reader = BTreeMap::new();
    reader.insert("a/b/c/d".to_string(), 3.0);

    let expr = parse_expression("a/b/c/d ^ 2").unwrap();
    assert_eq!(Evaluator::new(reader).evaluate(&expr).unwrap(), 9.0);
}

#[test]
fn test_unknown_attribute() {
    let reader = values(vec![("a/b/c/d", 1.0)]);
    assert_eq!(
        eval("a/b/c/d + x/y/z/w", &reader),
        Err(EvalError::UnknownAttribute("x/y/z/w".to_string()))
    );
}

#[test]
fn test_reader_failure_propagates() {
    let result = evaluate_expression("a/b/c/d + 1", OfflineReader);
    assert!(matches!(
        result,
        Err(EvalError::ReadFailed { path, .. }) if path == "a/b/c/d"
    ));
}

#[test]
fn test_every_attribute_leaf_is_read_left_to_right() {
    let reader = RecordingReader {
        values: values(vec![("a/b/c/d", 2.0), ("x/y/z/w", 3.0)]),
        reads: RefCell::new(Vec::new()),
    };

    let expr = parse_expression("a/b/c/d * ( x/y/z/w + a/b/c/d )").unwrap();
    let evaluator = Evaluator::new(&reader);
    assert_eq!(evaluator.evaluate(&expr).unwrap(), 10.0);

    assert_eq!(
        *reader.reads.borrow(),
        vec!["a/b/c/d", "x/y/z/w", "a/b/c/d"]
    );
    assert_eq!(expr.attributes(), vec!["a/b/c/d", "x/y/z/w"]);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_division_by_zero() {
    let reader = values(vec![("a/b/c/d", 0.0)]);
    assert_eq!(eval("1 / a/b/c/d", &reader), Err(EvalError::DivisionByZero));
    assert_eq!(eval("1 / ( 2 - 2 )", &reader), Err(EvalError::DivisionByZero));
}

#[test]
fn test_non_finite_result() {
    let none = values(vec![]);
    assert!(matches!(
        eval("-1 ^ 0.5", &none),
        Err(EvalError::NonFinite { op: BinOp::Power, .. })
    ));
    assert!(matches!(
        eval("10 ^ 400", &none),
        Err(EvalError::NonFinite { .. })
    ));
}

#[test]
fn test_overflowing_number_leaf() {
    let none = values(vec![]);
    assert_eq!(
        eval("1e400", &none),
        Err(EvalError::InvalidNumber("1e400".to_string()))
    );
    assert_eq!(
        eval("1 + -1e400", &none),
        Err(EvalError::InvalidNumber("-1e400".to_string()))
    );
}

#[test]
fn test_non_finite_attribute_value() {
    let reader = values(vec![("a/b/c/d", f64::NAN), ("x/y/z/w", f64::INFINITY)]);
    assert!(matches!(
        eval("a/b/c/d", &reader),
        Err(EvalError::NonFiniteAttribute { path, value }) if path == "a/b/c/d" && value.is_nan()
    ));
    assert!(matches!(
        eval("2 * x/y/z/w", &reader),
        Err(EvalError::NonFiniteAttribute { path, .. }) if path == "x/y/z/w"
    ));
}

#[test]
fn test_parse_errors_surface_through_evaluation() {
    let none = values(vec![]);
    assert_eq!(
        eval("2 +", &none),
        Err(EvalError::Parse(ParseError::TrailingOperator("+".to_string())))
    );
    assert_eq!(
        eval("2 +", &none).unwrap_err().to_string(),
        "final token of expression is an operator: '+'"
    );
}

#[test]
fn test_apply_binop_direct() {
    assert_eq!(apply_binop(BinOp::Subtract, 5.0, 7.5), Ok(-2.5));
    assert_eq!(apply_binop(BinOp::Divide, 1.0, 0.0), Err(EvalError::DivisionByZero));
    // Outside the Decimal range, float arithmetic takes over
    assert_eq!(apply_binop(BinOp::Multiply, 2e30, 4.0), Ok(8e30));
    // Too small for a Decimal, must not collapse to zero
    assert_eq!(apply_binop(BinOp::Multiply, 1e-30, 2.0), Ok(2e-30));
}
