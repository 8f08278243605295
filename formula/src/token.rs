//! FILENAME: formula/src/token.rs
//! PURPOSE: Token definitions for the formula lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by
//! the validator. A validated Formula keeps its tokens, so downstream
//! evaluators read kind and text straight from this type.

use serde::{Deserialize, Serialize};

/// The four binary operators allowed in a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Plus,
    Minus,
    Asterisk,
    Slash,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Asterisk),
            '/' => Some(Operator::Slash),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Asterisk => '*',
            Operator::Slash => '/',
        }
    }
}

/// Tokens recognized by the formula lexer.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Token {
    /// Numeric literal. `literal` is the source text, `value` its parsed double.
    Number { literal: String, value: f64 },
    /// Letters followed by digits, stored exactly as written (e.g. "x12").
    Variable(String),
    Operator(Operator),
    LParen,
    RParen,
    /// Anything the lexer could not classify, kept verbatim.
    Unrecognized(String),
}

/// Discriminant of a [`Token`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Variable,
    Operator,
    LParen,
    RParen,
    Unrecognized,
}

impl Token {
    /// Builds a number token from its literal text.
    /// Returns None when the text is not a valid literal.
    pub fn number(literal: &str) -> Option<Self> {
        if !is_number_literal(literal) {
            return None;
        }
        let value = literal.parse::<f64>().ok()?;
        Some(Token::Number {
            literal: literal.to_string(),
            value,
        })
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number { .. } => TokenKind::Number,
            Token::Variable(_) => TokenKind::Variable,
            Token::Operator(_) => TokenKind::Operator,
            Token::LParen => TokenKind::LParen,
            Token::RParen => TokenKind::RParen,
            Token::Unrecognized(_) => TokenKind::Unrecognized,
        }
    }

    /// True for numbers and variables.
    pub fn is_value(&self) -> bool {
        matches!(self, Token::Number { .. } | Token::Variable(_))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }

    /// Text used when rendering the canonical form of a formula.
    ///
    /// Numbers are re-rendered from their double value, so `5.0000` and `5`
    /// both become `5`. Variables are upper-cased (digits are unaffected).
    pub fn canonical_text(&self) -> String {
        match self {
            Token::Number { value, .. } => format!("{}", value),
            Token::Variable(name) => name.to_ascii_uppercase(),
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number { literal, .. } => write!(f, "{}", literal),
            Token::Variable(name) => write!(f, "{}", name),
            Token::Operator(op) => write!(f, "{}", op.as_char()),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Unrecognized(text) => write!(f, "{}", text),
        }
    }
}

/// Returns true if `text` is one or more ASCII letters followed by one or
/// more ASCII digits, and nothing else.
pub fn is_variable_name(text: &str) -> bool {
    let letters = text.bytes().take_while(u8::is_ascii_alphabetic).count();
    let digits = text[letters..].bytes().take_while(u8::is_ascii_digit).count();
    letters > 0 && digits > 0 && letters + digits == text.len()
}

/// Returns true if `text` is a complete numeric literal:
/// `\d+\.\d*`, `\d*\.\d+` or `\d+`, then an optional `[eE][+-]?\d+`.
pub fn is_number_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let len = scan_number(bytes);
    len > 0 && len == bytes.len()
}

/// Length in bytes of the longest numeric literal at the start of `bytes`,
/// or 0 if there is none.
pub(crate) fn scan_number(bytes: &[u8]) -> usize {
    let count_digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let int_digits = count_digits(0);
    let mut pos = int_digits;
    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(pos + 1);
        // A lone "." is not a number.
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(exp);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }
    pos
}
