use std::fmt;

use crate::ast::BinOp;

/// Abstract Syntax Tree node representing a parsed expression.
///
/// Leaves are operands kept exactly as written in the input; the evaluator
/// decides what they mean. Every other node is a binary operation whose
/// children must be reduced before the node itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // Leaves
    /// Numeric literal, as written
    ///
    /// # Example
    /// ```text
    /// 42
    /// 0.5
    /// ```
    Number(String),

    /// Remote attribute reference
    ///
    /// # Example
    /// ```text
    /// sys/pwr/psu-01/current
    /// ```
    Attribute(String),

    // Operations
    /// Binary operation `left op right`
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    /// Build a binary node from two subtrees.
    pub fn binary(left: Expr, op: BinOp, right: Expr) -> Self {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, Expr::BinaryOp { .. })
    }

    /// Leaf texts in left-to-right input order.
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Expr::Number(text) | Expr::Attribute(text) => out.push(text),
            Expr::BinaryOp { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }

    /// Distinct attribute paths referenced by the expression, in order of
    /// first appearance.
    ///
    /// # Examples
    ///
    /// ```
    /// use attribute_calculator::parse_expression;
    ///
    /// let expr = parse_expression("a/b/c/d * ( a/b/c/d + x/y/z/w )").unwrap();
    /// assert_eq!(expr.attributes(), vec!["a/b/c/d", "x/y/z/w"]);
    /// ```
    pub fn attributes(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        let mut stack = vec![self];

        // Right child pushed first so the left subtree is visited first.
        while let Some(node) = stack.pop() {
            match node {
                Expr::Attribute(path) => {
                    if !out.contains(&path.as_str()) {
                        out.push(path);
                    }
                }
                Expr::Number(_) => {}
                Expr::BinaryOp { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        out
    }
}

/// Renders the nested-list form, e.g. `[2, '+', [3, '*', 4]]`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(text) | Expr::Attribute(text) => write!(f, "{text}"),
            Expr::BinaryOp { op, left, right } => write!(f, "[{left}, '{op}', {right}]"),
        }
    }
}
