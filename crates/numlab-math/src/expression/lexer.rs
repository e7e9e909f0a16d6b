//! Tokenizer for the expression grammar.

use crate::error::{MathError, MathResult};

/// A lexical token with its byte offset in the source.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Number(f64),
    Identifier(String),
    Plus,
    Minus,
    Star,
    Slash,
    /// `^` or `**`.
    Power,
    LeftParen,
    RightParen,
}

impl TokenKind {
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Number(v) => format!("number {v}"),
            TokenKind::Identifier(name) => format!("identifier '{name}'"),
            TokenKind::Plus => "'+'".to_string(),
            TokenKind::Minus => "'-'".to_string(),
            TokenKind::Star => "'*'".to_string(),
            TokenKind::Slash => "'/'".to_string(),
            TokenKind::Power => "'^'".to_string(),
            TokenKind::LeftParen => "'('".to_string(),
            TokenKind::RightParen => "')'".to_string(),
        }
    }
}

/// Splits `source` into tokens.
pub(crate) fn tokenize(source: &str) -> MathResult<Vec<Token>> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let c = bytes[pos];

        if c.is_ascii_whitespace() {
            pos += 1;
            continue;
        }

        let start = pos;
        let kind = match c {
            b'+' => {
                pos += 1;
                TokenKind::Plus
            }
            b'-' => {
                pos += 1;
                TokenKind::Minus
            }
            b'*' if bytes.get(pos + 1) == Some(&b'*') => {
                pos += 2;
                TokenKind::Power
            }
            b'*' => {
                pos += 1;
                TokenKind::Star
            }
            b'/' => {
                pos += 1;
                TokenKind::Slash
            }
            b'^' => {
                pos += 1;
                TokenKind::Power
            }
            b'(' => {
                pos += 1;
                TokenKind::LeftParen
            }
            b')' => {
                pos += 1;
                TokenKind::RightParen
            }
            b'0'..=b'9' => {
                pos = scan_number(bytes, pos);
                parse_number(source, start, pos)?
            }
            b'.' if bytes.get(pos + 1).is_some_and(u8::is_ascii_digit) => {
                pos = scan_number(bytes, pos);
                parse_number(source, start, pos)?
            }
            b'.' => {
                return Err(MathError::invalid_expression(
                    start,
                    "attribute access is not allowed",
                ));
            }
            c if c.is_ascii_alphabetic() || c == b'_' => {
                while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_')
                {
                    pos += 1;
                }
                TokenKind::Identifier(source[start..pos].to_string())
            }
            _ => {
                let ch = source[start..].chars().next().unwrap_or('?');
                return Err(MathError::invalid_expression(
                    start,
                    format!("unexpected character '{ch}'"),
                ));
            }
        };

        tokens.push(Token {
            kind,
            position: start,
        });
    }

    Ok(tokens)
}

/// Returns the end offset of the numeric literal starting at `pos`.
fn scan_number(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
    }
    // Exponent only when digits follow, so `2e` stays a number and an identifier.
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut look = pos + 1;
        if look < bytes.len() && (bytes[look] == b'+' || bytes[look] == b'-') {
            look += 1;
        }
        if look < bytes.len() && bytes[look].is_ascii_digit() {
            pos = look;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
        }
    }
    pos
}

fn parse_number(source: &str, start: usize, end: usize) -> MathResult<TokenKind> {
    let text = &source[start..end];
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(TokenKind::Number)
        .ok_or_else(|| MathError::invalid_expression(start, format!("invalid number '{text}'")))
}
