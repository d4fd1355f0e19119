use std::fmt;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    /// Exponentiation (`^`)
    Power,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
}

impl BinOp {
    /// Look up an operator by its exact textual form.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "^" => Some(BinOp::Power),
            "*" => Some(BinOp::Multiply),
            "/" => Some(BinOp::Divide),
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Subtract),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::Power => '^',
            BinOp::Multiply => '*',
            BinOp::Divide => '/',
            BinOp::Add => '+',
            BinOp::Subtract => '-',
        }
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Power => 3,
            BinOp::Multiply | BinOp::Divide => 2,
            BinOp::Add | BinOp::Subtract => 1,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
