//! Safe evaluation of single-variable expressions.
//!
//! Expressions are parsed with a small restricted grammar and interpreted
//! directly; nothing outside the allow-listed vocabulary can be expressed.
//!
//! | Element | Allowed |
//! |---------|---------|
//! | Variable | `x` |
//! | Constants | `pi`, `e`, decimal literals (`1.5e-3`) |
//! | Operators | `+ - * /`, `^` or `**` (right associative), unary `-` |
//! | Functions | `sqrt`, `exp`, `log` (natural), `sin`, `cos` |
//!
//! # Example
//!
//! ```rust
//! use numlab_math::expression::Expression;
//!
//! let f = Expression::parse("x^3 - 2*x - 5").unwrap();
//! assert_eq!(f.evaluate(2.0).unwrap(), -1.0);
//! ```

mod lexer;
mod parser;

use std::fmt;
use std::str::FromStr;

pub use parser::{BinaryOp, Function, Node, MAX_DEPTH, VARIABLE};

use crate::error::{MathError, MathResult};

/// Longest accepted source text, in bytes.
pub const MAX_EXPRESSION_LEN: usize = 1024;

/// A parsed, immutable expression over the free variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: Node,
}

impl Expression {
    /// Parses `source`, rejecting anything outside the allowed vocabulary.
    pub fn parse(source: &str) -> MathResult<Self> {
        if source.len() > MAX_EXPRESSION_LEN {
            return Err(MathError::invalid_expression(
                MAX_EXPRESSION_LEN,
                format!("expression longer than {MAX_EXPRESSION_LEN} bytes"),
            ));
        }

        let tokens = lexer::tokenize(source)?;
        let root = parser::parse(tokens, source.len())?;

        Ok(Self {
            source: source.trim().to_string(),
            root,
        })
    }

    /// Evaluates the expression at `x`.
    ///
    /// Fails with [`MathError::Evaluation`] on domain errors and whenever an
    /// intermediate or final value is not finite.
    pub fn evaluate(&self, x: f64) -> MathResult<f64> {
        if !x.is_finite() {
            return Err(MathError::evaluation(format!(
                "cannot evaluate '{}' at non-finite x = {x}",
                self.source
            )));
        }
        eval_node(&self.root, x)
    }

    /// The source text (trimmed).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns true if `x` appears in the expression.
    pub fn references_variable(&self) -> bool {
        self.root.references_variable()
    }

    /// Adapts the expression to the objective signature used by the solvers.
    pub fn as_fn(&self) -> impl Fn(f64) -> MathResult<f64> + '_ {
        move |x| self.evaluate(x)
    }
}

impl FromStr for Expression {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Parses `source` and evaluates it at `x` in one call.
pub fn evaluate(source: &str, x: f64) -> MathResult<f64> {
    Expression::parse(source)?.evaluate(x)
}

fn eval_node(node: &Node, x: f64) -> MathResult<f64> {
    match node {
        Node::Number(value) => Ok(*value),
        Node::Variable => Ok(x),
        Node::Neg(inner) => Ok(-eval_node(inner, x)?),
        Node::Binary { op, lhs, rhs } => {
            let l = eval_node(lhs, x)?;
            let r = eval_node(rhs, x)?;
            let value = match op {
                BinaryOp::Add => l + r,
                BinaryOp::Sub => l - r,
                BinaryOp::Mul => l * r,
                BinaryOp::Div if r == 0.0 => {
                    return Err(MathError::evaluation(format!(
                        "division by zero at x = {x}"
                    )));
                }
                BinaryOp::Div => l / r,
                BinaryOp::Pow => l.powf(r),
            };
            finite(value, || format!("{l} {} {r}", op.symbol()), x)
        }
        Node::Call { function, arg } => {
            let a = eval_node(arg, x)?;
            let value = function.apply(a)?;
            finite(value, || format!("{}({a})", function.name()), x)
        }
    }
}

fn finite(value: f64, describe: impl FnOnce() -> String, x: f64) -> MathResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MathError::evaluation(format!(
            "{} is not a finite number (x = {x})",
            describe()
        )))
    }
}
