//! FILENAME: formula/src/error.rs

use thiserror::Error;

/// Why a string was rejected as a formula.
///
/// Validation is fail-fast, so a rejected formula reports only the first rule
/// it breaks, scanning left to right.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    #[error("Empty formula")]
    EmptyFormula,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Invalid first token: {0}")]
    InvalidStart(String),

    #[error("Invalid last token: {0}")]
    InvalidEnd(String),

    #[error("Mismatched parentheses")]
    UnbalancedParens,

    #[error("Consecutive operators: {previous}{current}")]
    ConsecutiveOperators { previous: String, current: String },

    #[error("Missing operator between {previous} and {current}")]
    MissingOperator { previous: String, current: String },

    #[error("Invalid token after opening parenthesis: {0}")]
    InvalidAfterOpenParen(String),

    #[error("Invalid token before closing parenthesis: {0}")]
    InvalidBeforeCloseParen(String),
}

pub type FormulaResult<T> = Result<T, FormulaError>;
