//! Selector compilation and evaluation.
//!
//! This module provides:
//! - Lexer and token definitions for the selector grammar
//! - Recursive-descent parser building the expression tree
//! - Literal and LIKE-pattern compilers
//! - Three-valued evaluation against a property environment

pub mod ast;
pub mod eval;
pub mod lexer;
pub mod like;
pub mod literal;
pub mod operator;
pub mod parser;
pub mod token;

pub use ast::Expression;
pub use lexer::Lexer;
pub use like::LikePattern;
pub use operator::{BinaryOperator, UnaryOperator};
pub use parser::Parser;
pub use token::Token;

use crate::property::Env;
use std::fmt;
use thiserror::Error;

/// Errors raised while compiling a selector string.
///
/// Evaluation never fails: type mismatches and missing properties are
/// absorbed by the three-valued logic instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectorError {
    #[error("Illegal selector: '{token}': {reason}")]
    Parse { token: String, reason: String },
}

impl SelectorError {
    pub(crate) fn parse(token: impl Into<String>, reason: impl Into<String>) -> Self {
        SelectorError::Parse {
            token: token.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SelectorError>;

/// A compiled selector: immutable, side-effect-free, and safe to evaluate
/// concurrently against independent environments.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    root: Expression,
}

impl Selector {
    /// Evaluate against a message's properties. `Unknown` and `False` both
    /// report `false`; only `True` matches.
    pub fn evaluate<E: Env + ?Sized>(&self, env: &E) -> bool {
        eval::eval_bool(&self.root, env).is_true()
    }

    /// The root of the compiled expression tree.
    pub fn root(&self) -> &Expression {
        &self.root
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

/// Compile a selector string into an evaluable [`Selector`].
///
/// An empty string compiles to the literal `true`; trailing input after a
/// complete expression is an error.
pub fn compile(text: &str) -> Result<Selector> {
    let root = Parser::new(text)?.parse()?;
    let selector = Selector { root };
    log::debug!("compiled selector {:?} as {}", text, selector);
    Ok(selector)
}
