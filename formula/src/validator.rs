//! FILENAME: formula/src/validator.rs
//! PURPOSE: Single-pass grammar check that turns a token stream into a Formula.
//! CONTEXT: Second stage of the pipeline. The lexer accepts anything; this
//! module is where malformed input is rejected. It walks the tokens once,
//! tracking parenthesis depth and the state reached by the previous token.
//!
//! STATES:
//!   Start           --> before the first token
//!   AfterValue      --> after a number or variable
//!   AfterOperator   --> after + - * /
//!   AfterOpenParen  --> after (
//!   AfterCloseParen --> after )
//!
//! FORBIDDEN TRANSITIONS:
//!   Start           --> operator | )
//!   AfterValue      --> number | variable
//!   AfterOperator   --> operator | )
//!   AfterOpenParen  --> operator | )
//! End of input is only accepted at depth zero from AfterValue or AfterCloseParen.

use crate::error::{FormulaError, FormulaResult};
use crate::formula::Formula;
use crate::token::{is_number_literal, is_variable_name, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    AfterValue,
    AfterOperator,
    AfterOpenParen,
    AfterCloseParen,
}

/// Checks `tokens` against the infix grammar and wraps them in a Formula.
pub fn validate(tokens: Vec<Token>) -> FormulaResult<Formula> {
    if tokens.is_empty() {
        return Err(FormulaError::EmptyFormula);
    }

    let mut validator = Validator::new();
    for token in &tokens {
        validator.accept(token)?;
    }
    validator.finish()?;

    log::trace!("validated formula with {} tokens", tokens.len());
    Ok(Formula::from_validated(tokens))
}

struct Validator<'t> {
    state: State,
    depth: usize,
    previous: Option<&'t Token>,
}

impl<'t> Validator<'t> {
    fn new() -> Self {
        Validator {
            state: State::Start,
            depth: 0,
            previous: None,
        }
    }

    /// Applies every per-token rule in order; the first one broken is reported.
    fn accept(&mut self, token: &'t Token) -> FormulaResult<()> {
        check_shape(token)?;

        if self.state == State::Start && (token.is_operator() || *token == Token::RParen) {
            return Err(FormulaError::InvalidStart(token.to_string()));
        }

        match token {
            Token::LParen => self.depth += 1,
            Token::RParen if self.depth == 0 => return Err(FormulaError::UnbalancedParens),
            Token::RParen => self.depth -= 1,
            _ => {}
        }

        match self.state {
            State::AfterOperator if token.is_operator() => {
                return Err(FormulaError::ConsecutiveOperators {
                    previous: self.previous_text(),
                    current: token.to_string(),
                });
            }
            State::AfterValue if token.is_value() => {
                return Err(FormulaError::MissingOperator {
                    previous: self.previous_text(),
                    current: token.to_string(),
                });
            }
            State::AfterOpenParen if token.is_operator() || *token == Token::RParen => {
                return Err(FormulaError::InvalidAfterOpenParen(token.to_string()));
            }
            State::AfterOperator if *token == Token::RParen => {
                return Err(FormulaError::InvalidBeforeCloseParen(self.previous_text()));
            }
            _ => {}
        }

        self.state = match token {
            Token::Number { .. } | Token::Variable(_) => State::AfterValue,
            Token::Operator(_) => State::AfterOperator,
            Token::LParen => State::AfterOpenParen,
            Token::RParen => State::AfterCloseParen,
            Token::Unrecognized(text) => return Err(FormulaError::InvalidToken(text.clone())),
        };
        self.previous = Some(token);
        Ok(())
    }

    fn finish(self) -> FormulaResult<()> {
        if self.depth != 0 {
            return Err(FormulaError::UnbalancedParens);
        }
        match self.state {
            State::AfterOperator | State::AfterOpenParen => {
                Err(FormulaError::InvalidEnd(self.previous_text()))
            }
            _ => Ok(()),
        }
    }

    fn previous_text(&self) -> String {
        self.previous.map(Token::to_string).unwrap_or_default()
    }
}

/// Rejects tokens that cannot appear in a formula at all: unrecognized text,
/// numbers or variables whose text does not have the right shape, and numbers
/// that overflow or disagree with their literal.
fn check_shape(token: &Token) -> FormulaResult<()> {
    let valid = match token {
        Token::Unrecognized(_) => false,
        Token::Variable(name) => is_variable_name(name),
        Token::Number { literal, value } => {
            is_number_literal(literal)
                && value.is_finite()
                && literal.parse::<f64>().map_or(false, |parsed| parsed == *value)
        }
        Token::Operator(_) | Token::LParen | Token::RParen => true,
    };
    if valid {
        Ok(())
    } else {
        Err(FormulaError::InvalidToken(token.to_string()))
    }
}
