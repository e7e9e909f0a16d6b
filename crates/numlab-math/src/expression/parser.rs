//! Recursive-descent parser producing the expression tree.

use super::lexer::{Token, TokenKind};
use crate::error::{MathError, MathResult};

/// Maximum nesting of parentheses, calls, signs and powers.
pub const MAX_DEPTH: usize = 64;

/// Name of the single free variable.
pub const VARIABLE: &str = "x";

/// Functions callable from an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// Square root; negative arguments are a domain error.
    Sqrt,
    /// Natural exponential.
    Exp,
    /// Natural logarithm; non-positive arguments are a domain error.
    Log,
    /// Sine (radians).
    Sin,
    /// Cosine (radians).
    Cos,
}

impl Function {
    /// Looks up an allow-listed function by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sqrt" => Some(Self::Sqrt),
            "exp" => Some(Self::Exp),
            "log" => Some(Self::Log),
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            _ => None,
        }
    }

    /// Name as written in expressions.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Sin => "sin",
            Self::Cos => "cos",
        }
    }

    pub(crate) fn apply(self, value: f64) -> MathResult<f64> {
        match self {
            Self::Sqrt if value < 0.0 => Err(MathError::evaluation(format!(
                "sqrt of negative value {value}"
            ))),
            Self::Log if value <= 0.0 => Err(MathError::evaluation(format!(
                "log of non-positive value {value}"
            ))),
            Self::Sqrt => Ok(value.sqrt()),
            Self::Exp => Ok(value.exp()),
            Self::Log => Ok(value.ln()),
            Self::Sin => Ok(value.sin()),
            Self::Cos => Ok(value.cos()),
        }
    }
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`, right-associative.
    Pow,
}

impl BinaryOp {
    pub(crate) fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

/// Expression tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Numeric literal or named constant.
    Number(f64),
    /// The free variable.
    Variable,
    /// Unary negation.
    Neg(Box<Node>),
    /// Binary operation.
    Binary {
        /// Operator applied to the operands.
        op: BinaryOp,
        /// Left operand.
        lhs: Box<Node>,
        /// Right operand.
        rhs: Box<Node>,
    },
    /// Single-argument function call.
    Call {
        /// Function being applied.
        function: Function,
        /// Argument expression.
        arg: Box<Node>,
    },
}

impl Node {
    /// Returns true if the free variable occurs anywhere in the tree.
    pub fn references_variable(&self) -> bool {
        match self {
            Node::Number(_) => false,
            Node::Variable => true,
            Node::Neg(inner) => inner.references_variable(),
            Node::Binary { lhs, rhs, .. } => lhs.references_variable() || rhs.references_variable(),
            Node::Call { arg, .. } => arg.references_variable(),
        }
    }
}

/// Parses a token stream into a single expression tree.
pub(crate) fn parse(tokens: Vec<Token>, source_len: usize) -> MathResult<Node> {
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        source_len,
    };

    if parser.tokens.is_empty() {
        return Err(MathError::invalid_expression(0, "expression is empty"));
    }

    let node = parser.expression()?;

    if let Some(token) = parser.peek() {
        return Err(MathError::invalid_expression(
            token.position,
            format!("unexpected {}", token.kind.describe()),
        ));
    }

    Ok(node)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    source_len: usize,
}

impl Parser {
    fn expression(&mut self) -> MathResult<Node> {
        let mut node = self.term()?;

        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Plus) => BinaryOp::Add,
                Some(TokenKind::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.term()?;
            node = binary(op, node, rhs);
        }

        Ok(node)
    }

    fn term(&mut self) -> MathResult<Node> {
        let mut node = self.unary()?;

        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Star) => BinaryOp::Mul,
                Some(TokenKind::Slash) => BinaryOp::Div,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.unary()?;
            node = binary(op, node, rhs);
        }

        Ok(node)
    }

    fn unary(&mut self) -> MathResult<Node> {
        self.enter()?;

        let node = match self.peek_kind() {
            Some(TokenKind::Minus) => {
                self.pos += 1;
                Node::Neg(Box::new(self.unary()?))
            }
            Some(TokenKind::Plus) => {
                self.pos += 1;
                self.unary()?
            }
            _ => self.power()?,
        };

        self.depth -= 1;
        Ok(node)
    }

    /// Exponentiation binds tighter than unary minus: `-x^2 == -(x^2)`.
    fn power(&mut self) -> MathResult<Node> {
        let base = self.primary()?;

        if matches!(self.peek_kind(), Some(TokenKind::Power)) {
            self.pos += 1;
            let exponent = self.unary()?;
            return Ok(binary(BinaryOp::Pow, base, exponent));
        }

        Ok(base)
    }

    fn primary(&mut self) -> MathResult<Node> {
        let Some(token) = self.advance() else {
            return Err(MathError::invalid_expression(
                self.source_len,
                "unexpected end of expression",
            ));
        };

        match token.kind {
            TokenKind::Number(value) => Ok(Node::Number(value)),
            TokenKind::LeftParen => {
                self.enter()?;
                let inner = self.expression()?;
                self.expect_right_paren(token.position)?;
                self.depth -= 1;
                Ok(inner)
            }
            TokenKind::Identifier(name) => self.identifier(&name, token.position),
            other => Err(MathError::invalid_expression(
                token.position,
                format!("unexpected {}", other.describe()),
            )),
        }
    }

    fn identifier(&mut self, name: &str, position: usize) -> MathResult<Node> {
        if name == VARIABLE {
            return Ok(Node::Variable);
        }
        match name {
            "pi" => return Ok(Node::Number(std::f64::consts::PI)),
            "e" => return Ok(Node::Number(std::f64::consts::E)),
            _ => {}
        }

        let Some(function) = Function::from_name(name) else {
            return Err(MathError::invalid_expression(
                position,
                format!("unknown name '{name}'"),
            ));
        };

        match self.advance() {
            Some(Token {
                kind: TokenKind::LeftParen,
                position: open,
            }) => {
                self.enter()?;
                let arg = self.expression()?;
                self.expect_right_paren(open)?;
                self.depth -= 1;
                Ok(Node::Call {
                    function,
                    arg: Box::new(arg),
                })
            }
            _ => Err(MathError::invalid_expression(
                position,
                format!("function '{}' must be called with parentheses", function.name()),
            )),
        }
    }

    fn expect_right_paren(&mut self, open: usize) -> MathResult<()> {
        match self.advance() {
            Some(Token {
                kind: TokenKind::RightParen,
                ..
            }) => Ok(()),
            Some(token) => Err(MathError::invalid_expression(
                token.position,
                format!("expected ')' but found {}", token.kind.describe()),
            )),
            None => Err(MathError::invalid_expression(
                open,
                "unclosed parenthesis",
            )),
        }
    }

    fn enter(&mut self) -> MathResult<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            let position = self.peek().map_or(self.source_len, |t| t.position);
            return Err(MathError::invalid_expression(
                position,
                format!("expression nested deeper than {MAX_DEPTH} levels"),
            ));
        }
        Ok(())
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }
}

fn binary(op: BinaryOp, lhs: Node, rhs: Node) -> Node {
    Node::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::lexer::tokenize;

    fn parse_str(source: &str) -> MathResult<Node> {
        parse(tokenize(source)?, source.len())
    }

    #[test]
    fn test_precedence() {
        let node = parse_str("1 + 2 * x").unwrap();
        assert_eq!(
            node,
            binary(
                BinaryOp::Add,
                Node::Number(1.0),
                binary(BinaryOp::Mul, Node::Number(2.0), Node::Variable)
            )
        );
    }

    #[test]
    fn test_power_is_right_associative() {
        let node = parse_str("2^3^2").unwrap();
        assert_eq!(
            node,
            binary(
                BinaryOp::Pow,
                Node::Number(2.0),
                binary(BinaryOp::Pow, Node::Number(3.0), Node::Number(2.0))
            )
        );
    }

    #[test]
    fn test_negation_binds_looser_than_power() {
        let node = parse_str("-x^2").unwrap();
        assert_eq!(
            node,
            Node::Neg(Box::new(binary(
                BinaryOp::Pow,
                Node::Variable,
                Node::Number(2.0)
            )))
        );
    }

    #[test]
    fn test_function_call() {
        let node = parse_str("sqrt(x)").unwrap();
        assert!(matches!(
            node,
            Node::Call {
                function: Function::Sqrt,
                ..
            }
        ));
        assert!(node.references_variable());
    }

    #[test]
    fn test_rejects_unknown_names() {
        let err = parse_str("y + 1").unwrap_err();
        assert!(matches!(err, MathError::InvalidExpression { position: 0, .. }));

        assert!(parse_str("__import__(x)").is_err());
        assert!(parse_str("tan(x)").is_err());
        assert!(parse_str("sqrt x").is_err());
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(parse_str("").is_err());
        assert!(parse_str("(x + 1").is_err());
        assert!(parse_str("x + ").is_err());
        assert!(parse_str("x 2").is_err());
        assert!(parse_str(")").is_err());
    }

    #[test]
    fn test_depth_limit() {
        let deep = format!("{}x{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert!(parse_str(&deep).is_err());

        let shallow = format!("{}x{}", "(".repeat(10), ")".repeat(10));
        assert!(parse_str(&shallow).is_ok());
    }
}
