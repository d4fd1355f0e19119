//! Documentation content for the attrcalc CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Attributes,
    Errors,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" => Some(Self::Syntax),
            "operators" | "ops" | "precedence" => Some(Self::Operators),
            "attributes" | "attribute" | "attrs" | "paths" => Some(Self::Attributes),
            "errors" | "error" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"ATTRIBUTE CALCULATOR DOCUMENTATION

The attribute calculator evaluates arithmetic expressions whose operands are
numbers or remote instrument attributes, e.g.

  ( sys/pwr/psu-01/current + 0.5 ) * 2

DOCUMENTATION CATEGORIES

  syntax            Tokens, spacing and brackets
  operators         The five operators, precedence and associativity
  attributes        How attribute paths are written
  errors            Every syntax error and what causes it

QUICK REFERENCE

  2 + 3 * 4         Precedence: [2, '+', [3, '*', 4]]
  ( 2 + 3 ) * 4     Brackets:   [[2, '+', 3], '*', 4]
  2 ^ 3 ^ 2         Right-associative power: [2, '^', [3, '^', 2]]
  a/b/c/d - 1       Attribute operand

Run 'attrcalc doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Attributes) => Ok(ATTRIBUTES_DOC),
        Some(DocCategory::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Tokens and Brackets

TOKENS
  Operands, operators and brackets are separated by a space.

    2 + 3           valid
    2+3             invalid (one malformed token)

OPERANDS
  Numbers in decimal notation:
    42   -1   3.14   .5   1e-3

  Attributes as four-segment paths:
    sys/pwr/psu-01/current

  A negative number is written attached to its sign: -1. A lone '-' is
  always the subtraction operator.

BRACKETS
  Brackets may stand alone or be attached to the operand next to them:

    ( 2 + 3 ) * 4
    (2 + 3) * 4     same tree

  Only one bracket is taken off each side of a word, so '((2' is a malformed
  token. Write nested brackets apart: '( (2 + 3) )'.

ORDER
  Operands and operators must alternate, starting and ending with an operand.
  There is no implicit multiplication: '2 ( 3 )' is rejected.
"#;

const OPERATORS_DOC: &str = r#"OPERATORS - Precedence and Associativity

  ^     Power                     tightest, right-associative
  *     Multiplication            left-associative
  /     Division                  left-associative
  +     Addition                  loosest, left-associative
  -     Subtraction               left-associative

EXAMPLES
  2 + 3 * 4         [2, '+', [3, '*', 4]]
  8 / 4 * 2         [[8, '/', 4], '*', 2]
  8 - 4 - 2         [[8, '-', 4], '-', 2]
  2 ^ 3 ^ 2         [2, '^', [3, '^', 2]]

EVALUATION
  +, -, * and / use exact decimal arithmetic where possible, so
  0.1 + 0.2 evaluates to 0.3. ^ uses floating-point power.
  Division by zero and results that are not finite are errors.
"#;

const ATTRIBUTES_DOC: &str = r#"ATTRIBUTES - Remote Attribute Paths

FORMAT
  domain/family/member/attribute

  Exactly four segments separated by '/'. Each segment:
    - starts with a letter, digit or '-'
    - continues with any characters except space, '/', '(' and ')'

EXAMPLES
  sys/pwr/psu-01/current
  r3-a110311cab01/mag/psia-01/current

REJECTED
  sys/pwr/current             three segments
  sys/pwr/psu-01/current/     trailing slash
  sys//psu-01/current         empty segment
  _sys/pwr/psu-01/current     segment starts with '_'

VALUES
  'attrcalc eval' reads attribute values from a JSON object:

    attrcalc eval 'sys/pwr/psu-01/current * 2' \
      --values '{"sys/pwr/psu-01/current": 1.5}'
    => 3
"#;

const ERRORS_DOC: &str = r#"ERRORS - Syntax Errors

  invalid input in '<word>'
      The word is not a number, attribute, operator or bracket.
      Example: 'a// b/c/d + 1'

  '<word>' was expected to be an operator, but is an operand
      Two operands in a row. Example: '2 2'

  '<word>' was expected to be an operand, but is an operator
      Operator at the start, after another operator or after '('.
      Example: '+ 2'

  final token of expression is an operator: '<word>'
      Example: '2 +'

  opening bracket at position N is opened but never closed
      Example: '( 2 + 3'

  closing bracket at position N is closed but never opened
      Example: '2 + 3 )'

  expression is empty

Positions count characters from 0 in the expression as typed, even after
earlier bracket pairs have been matched. When an expression has both a bracket
error and an operand/operator ordering error, the bracket error is reported.
"#;
