//! FILENAME: formula/src/lexer.rs
//! PURPOSE: Scans a raw formula string and produces a stream of Tokens.
//! CONTEXT: This is the first stage of the pipeline. The lexer never fails:
//! anything it cannot classify becomes Token::Unrecognized and the validator
//! decides what to do with it.
//!
//! RECOGNITION ORDER (at each position, longest match wins):
//! - ( and )
//! - Single char operators: + - * /
//! - Variables: a letter/digit run starting with a letter, e.g. x1, AB12
//! - Numbers: 12, 1.5, .5, 3., 1e10, 2.5E-3
//! - Whitespace (skipped)
//! - Anything else: one unrecognized character

use crate::token::{is_variable_name, scan_number, Operator, Token};

pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input, position: 0 }
    }

    /// Advances the lexer and returns the next token, or None at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let ch = self.rest().chars().next()?;
        let token = match ch {
            '(' => {
                self.position += 1;
                Token::LParen
            }
            ')' => {
                self.position += 1;
                Token::RParen
            }
            ch if ch.is_ascii_alphabetic() => self.read_variable(),
            ch if ch.is_ascii_digit() || ch == '.' => self.read_number(),
            ch => {
                self.position += ch.len_utf8();
                match Operator::from_char(ch) {
                    Some(op) => Token::Operator(op),
                    None => Token::Unrecognized(ch.to_string()),
                }
            }
        };
        Some(token)
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start();
        self.position += rest.len() - trimmed.len();
    }

    /// Reads the maximal letter/digit run. The whole run is either one
    /// variable or one unrecognized token; it is never split.
    fn read_variable(&mut self) -> Token {
        let rest = self.rest();
        let len = rest
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric())
            .count();
        self.position += len;

        let run = &rest[..len];
        if is_variable_name(run) {
            Token::Variable(run.to_string())
        } else {
            Token::Unrecognized(run.to_string())
        }
    }

    fn read_number(&mut self) -> Token {
        let rest = self.rest();
        let len = scan_number(rest.as_bytes());
        if len == 0 {
            // Only a lone "." gets here
            self.position += 1;
            return Token::Unrecognized(rest[..1].to_string());
        }
        self.position += len;

        let literal = &rest[..len];
        match literal.parse::<f64>() {
            Ok(value) => Token::Number {
                literal: literal.to_string(),
                value,
            },
            Err(_) => Token::Unrecognized(literal.to_string()),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Splits `input` into tokens, left to right, discarding whitespace.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}
