//! FILENAME: formula/src/lib.rs
//! PURPOSE: Library root for the formula syntax front end.
//! CONTEXT: This crate checks that a string is a well-formed infix formula,
//! renders its canonical form, and lists the variables it references.
//! Evaluation is left to consumers, which read the validated token stream.
//!
//! PIPELINE: Formula String --> Lexer --> Tokens --> Validator --> Formula
//!
//! SUPPORTED SYNTAX:
//! - Non-negative numbers: 3, 2.5, .5, 1e10, 6.02E+23
//! - Variables: letters followed by digits (x1, AB12), case-insensitive
//! - Binary operators: +, -, *, /
//! - Parentheses for grouping

pub mod error;
pub mod formula;
pub mod lexer;
pub mod token;
pub mod validator;


// Re-export commonly used types for convenience
pub use error::{FormulaError, FormulaResult};
pub use formula::Formula;
pub use lexer::{tokenize, Lexer};
pub use token::{Operator, Token, TokenKind};
pub use validator::validate;
