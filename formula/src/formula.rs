//! FILENAME: formula/src/formula.rs
//! PURPOSE: The validated, immutable Formula value and its derived views.
//! CONTEXT: A Formula can only be obtained through validation, so holding one
//! proves the token sequence is well formed. The canonical string is rendered
//! once at construction; equality, hashing, Display and serde all go through it.

use crate::error::{FormulaError, FormulaResult};
use crate::lexer::tokenize;
use crate::token::Token;
use crate::validator::validate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A syntactically valid infix formula.
///
/// Two formulas are equal when their canonical strings are equal, so
/// `x1 + 5.0` and `X1+5` compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Formula {
    tokens: Vec<Token>,
    canonical: String,
}

impl Formula {
    /// Tokenizes and validates `text`.
    pub fn new(text: &str) -> FormulaResult<Self> {
        validate(tokenize(text)).map_err(|err| {
            log::debug!("rejected formula {:?}: {}", text, err);
            err
        })
    }

    /// Only called by the validator once every grammar rule has passed.
    pub(crate) fn from_validated(tokens: Vec<Token>) -> Self {
        let canonical = tokens.iter().map(Token::canonical_text).collect();
        Formula { tokens, canonical }
    }

    /// The validated tokens, in source order, with their original text.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Whitespace-free form with upper-cased variables and minimal numbers,
    /// e.g. `x1 + 5.0000` becomes `X1+5`.
    pub fn canonical_string(&self) -> &str {
        &self.canonical
    }

    /// Every distinct variable referenced by the formula, upper-cased.
    pub fn variables(&self) -> HashSet<String> {
        self.tokens
            .iter()
            .filter(|token| matches!(token, Token::Variable(_)))
            .map(Token::canonical_text)
            .collect()
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Formula {}

impl Hash for Formula {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> FormulaResult<Self> {
        Formula::new(s)
    }
}

impl TryFrom<&str> for Formula {
    type Error = FormulaError;

    fn try_from(value: &str) -> FormulaResult<Self> {
        Formula::new(value)
    }
}

impl TryFrom<String> for Formula {
    type Error = FormulaError;

    fn try_from(value: String) -> FormulaResult<Self> {
        Formula::new(&value)
    }
}

impl From<Formula> for String {
    fn from(formula: Formula) -> Self {
        formula.canonical
    }
}
