//! Single-character tokens for infix, prefix and postfix expressions

use crate::core::{AlgoError, AlgoResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// Every supported operator
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Returns the precedence level (higher binds tighter)
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    /// Parses an operator symbol
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two operands
    pub fn apply(self, left: f64, right: f64) -> AlgoResult<f64> {
        match self {
            Self::Add => Ok(left + right),
            Self::Subtract => Ok(left - right),
            Self::Multiply => Ok(left * right),
            Self::Divide => {
                if right == 0.0 {
                    return Err(AlgoError::DivisionByZero);
                }
                Ok(left / right)
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Token types from lexical analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Single alphanumeric operand
    Operand(char),
    /// Binary operator
    Operator(Operator),
    /// Left parenthesis
    LeftParen,
    /// Right parenthesis
    RightParen,
}

impl Token {
    /// Classifies a character, or `None` when it is not part of the token set
    #[must_use]
    pub fn classify(ch: char) -> Option<Self> {
        if ch.is_alphanumeric() {
            return Some(Self::Operand(ch));
        }
        match ch {
            '(' => Some(Self::LeftParen),
            ')' => Some(Self::RightParen),
            _ => Operator::from_char(ch).map(Self::Operator),
        }
    }

    /// Returns the character this token was read from
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Operand(ch) => ch,
            Self::Operator(op) => op.symbol(),
            Self::LeftParen => '(',
            Self::RightParen => ')',
        }
    }

    /// Swaps `(` and `)`, leaving every other token unchanged
    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::LeftParen => Self::RightParen,
            Self::RightParen => Self::LeftParen,
            other => other,
        }
    }

    /// Returns true if this token is an operator
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Returns true if this token is an operand
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        matches!(self, Self::Operand(_))
    }

    /// Returns true if this token is a left parenthesis
    #[must_use]
    pub const fn is_left_paren(&self) -> bool {
        matches!(self, Self::LeftParen)
    }

    /// Returns true if this token is a right parenthesis
    #[must_use]
    pub const fn is_right_paren(&self) -> bool {
        matches!(self, Self::RightParen)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
