//! Infix to prefix / postfix expression conversion
//!
//! Operands are single alphanumeric characters; operators are `+ - * /`.
//! Conversion uses an operator-precedence stack (shunting yard).
//!
//! Two modes exist. [`Mode::Lenient`] is the default and reproduces the
//! classic console tool: characters outside the token set vanish silently
//! and unbalanced parentheses produce an unspecified (but panic-free)
//! result. [`Mode::Strict`] is an extension that rejects both, along with
//! empty input and operators or operands out of place.

mod converter;
mod evaluate;
mod token;
mod tokenizer;

pub use converter::{convert_to_postfix, convert_to_prefix, Conversion, Converter};
pub use evaluate::{digit_value, evaluate_postfix, evaluate_prefix, postfix_to_infix};
pub use token::{Operator, Token};
pub use tokenizer::Tokenizer;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Validation mode for tokenizing and converting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Drop unrecognized characters, never fail
    #[default]
    Lenient,
    /// Reject unrecognized characters, empty input, unbalanced parentheses
    /// and misplaced tokens
    Strict,
}

/// An ordered sequence of tokens
///
/// Displays as the token characters concatenated with no separators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expression(Vec<Token>);

impl Expression {
    /// Wraps a token sequence
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    /// Tokenizes `input` leniently
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        Tokenizer::new(input).tokenize().map(Self).unwrap_or_default()
    }

    /// Returns the tokens
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    /// Consumes the expression, returning its tokens
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.0
    }

    /// Number of tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no tokens
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Operand characters in order of appearance
    pub fn operands(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().filter_map(|t| match t {
            Token::Operand(ch) => Some(*ch),
            _ => None,
        })
    }

    /// Operators in order of appearance
    pub fn operators(&self) -> impl Iterator<Item = Operator> + '_ {
        self.0.iter().filter_map(|t| match t {
            Token::Operator(op) => Some(*op),
            _ => None,
        })
    }
}

impl From<Vec<Token>> for Expression {
    fn from(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }
}

impl FromIterator<Token> for Expression {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|t| write!(f, "{t}"))
    }
}

/// Converts an infix string to postfix, dropping unrecognized characters
#[must_use]
pub fn infix_to_postfix(infix: &str) -> String {
    Expression::new(convert_to_postfix(Expression::parse_lenient(infix).tokens())).to_string()
}

/// Converts an infix string to prefix, dropping unrecognized characters
#[must_use]
pub fn infix_to_prefix(infix: &str) -> String {
    Expression::new(convert_to_prefix(Expression::parse_lenient(infix).tokens())).to_string()
}
