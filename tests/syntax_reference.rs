// Syntax Reference Tests
//
// Each test covers one documented guarantee of the expression syntax: tree
// shapes, associativity, precedence and the error raised for each kind of
// malformed input.

use attribute_calculator::{Expr, ParseError, parse_expression};

fn tree(input: &str) -> String {
    parse_expression(input)
        .unwrap_or_else(|e| panic!("'{input}' failed to parse: {e}"))
        .to_string()
}

fn error(input: &str) -> ParseError {
    match parse_expression(input) {
        Ok(expr) => panic!("'{input}' unexpectedly parsed to {expr}"),
        Err(e) => e,
    }
}

// ============================================================================
// Section: Associativity
// ============================================================================

#[test]
fn syntax_power_groups_right() {
    assert_eq!(
        tree("a/b/c/d ^ e/f/g/h ^ i/j/k/l"),
        "[a/b/c/d, '^', [e/f/g/h, '^', i/j/k/l]]"
    );
}

#[test]
fn syntax_subtraction_groups_left() {
    assert_eq!(
        tree("a/b/c/d - e/f/g/h - i/j/k/l"),
        "[[a/b/c/d, '-', e/f/g/h], '-', i/j/k/l]"
    );
}

#[test]
fn syntax_division_groups_left() {
    assert_eq!(tree("1 / 2 * 3"), "[[1, '/', 2], '*', 3]");
}

// ============================================================================
// Section: Precedence
// ============================================================================

#[test]
fn syntax_multiplication_before_addition() {
    assert_eq!(tree("2 + 3 * 4"), "[2, '+', [3, '*', 4]]");
}

#[test]
fn syntax_brackets_override_precedence() {
    assert_eq!(tree("( 2 + 3 ) * 4"), "[[2, '+', 3], '*', 4]");
}

#[test]
fn syntax_grouping_example() {
    assert_eq!(
        tree("( x/y/z/w + 2 ) - 4 * 27"),
        "[[x/y/z/w, '+', 2], '-', [4, '*', 27]]"
    );
}

// ============================================================================
// Section: Operands
// ============================================================================

#[test]
fn syntax_attribute_passes_through_untouched() {
    let expr = parse_expression("sys/pwr/psu-01/current + 1").unwrap();
    assert_eq!(expr.to_string(), "[sys/pwr/psu-01/current, '+', 1]");

    match expr {
        Expr::BinaryOp { left, right, .. } => {
            assert_eq!(*left, Expr::Attribute("sys/pwr/psu-01/current".into()));
            assert_eq!(*right, Expr::Number("1".into()));
        }
        other => panic!("Expected binary operation, got {other:?}"),
    }
}

#[test]
fn syntax_realistic_device_names() {
    assert_eq!(
        tree("r3-a110311cab01/mag/psia-01/current * 2"),
        "[r3-a110311cab01/mag/psia-01/current, '*', 2]"
    );
}

#[test]
fn syntax_single_operand_is_a_leaf() {
    assert!(parse_expression("3.5").unwrap().is_leaf());
    assert!(parse_expression("a/b/c/d").unwrap().is_leaf());
}

// ============================================================================
// Section: Brackets
// ============================================================================

#[test]
fn syntax_attached_brackets_are_equivalent() {
    assert_eq!(
        parse_expression("(2 + 3)").unwrap(),
        parse_expression("( 2 + 3 )").unwrap()
    );
}

// ============================================================================
// Section: Errors
// ============================================================================

#[test]
fn syntax_leading_operator() {
    assert!(matches!(error("+ 2"), ParseError::UnexpectedOperator(t) if t == "+"));
}

#[test]
fn syntax_adjacent_operands() {
    assert!(matches!(error("2 2"), ParseError::UnexpectedOperand(t) if t == "2"));
}

#[test]
fn syntax_trailing_operator() {
    assert!(matches!(error("2 +"), ParseError::TrailingOperator(t) if t == "+"));
}

#[test]
fn syntax_unclosed_bracket() {
    assert_eq!(error("( 2 + 3"), ParseError::UnbalancedOpen(0));
}

#[test]
fn syntax_unopened_bracket() {
    assert_eq!(error("2 + 3 )"), ParseError::UnbalancedClose(6));
}

#[test]
fn syntax_malformed_path() {
    assert!(matches!(error("a// b/c/d + 1"), ParseError::MalformedToken(t) if t == "a//"));
}

#[test]
fn syntax_empty_expression() {
    assert_eq!(error(""), ParseError::EmptyExpression);
}

#[test]
fn syntax_error_messages_name_the_offender() {
    assert_eq!(error("2 2").to_string(), "'2' was expected to be an operator, but is an operand");
    assert_eq!(error("+ 2").to_string(), "'+' was expected to be an operand, but is an operator");
    assert_eq!(error("2 +").to_string(), "final token of expression is an operator: '+'");
    assert_eq!(error("2 + foo").to_string(), "invalid input in 'foo'");
    assert_eq!(
        error("( 2 + 3").to_string(),
        "opening bracket at position 0 is opened but never closed"
    );
    assert_eq!(
        error("2 + 3 )").to_string(),
        "closing bracket at position 6 is closed but never opened"
    );
}

#[test]
fn syntax_no_implicit_multiplication() {
    assert!(parse_expression("2 a/b/c/d").is_err());
    assert!(parse_expression("2 ( 3 )").is_err());
}

// ============================================================================
// Section: Properties
// ============================================================================

#[test]
fn syntax_leaves_traceable_to_tokens() {
    let input = "( a/b/c/d + 1 ) * 2 ^ e/f/g/h - 3 / 4";
    let expr = parse_expression(input).unwrap();

    let operands: Vec<&str> = input
        .split_whitespace()
        .map(|w| w.trim_start_matches('(').trim_end_matches(')'))
        .filter(|w| !w.is_empty() && !["+", "-", "*", "/", "^"].contains(w))
        .collect();

    assert_eq!(expr.leaves(), operands);
}

#[test]
fn syntax_parse_is_deterministic_across_threads() {
    let input = "( sys/pwr/psu-01/current + 1 ) * 2 ^ 3 ^ 2";
    let expected = parse_expression(input).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || parse_expression(input).unwrap()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
