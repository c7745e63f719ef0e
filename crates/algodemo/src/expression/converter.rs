//! Shunting-yard conversion from infix to postfix and prefix notation

use super::token::Token;
use super::tokenizer::Tokenizer;
use super::{Expression, Mode};
use crate::core::{AlgoError, AlgoResult};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Converts an infix token sequence to postfix order.
///
/// Operators of equal precedence are popped before the incoming one, so
/// `+ - * /` associate to the left. Parentheses are never emitted for
/// balanced input.
///
/// Unbalanced input does not panic but the result is unspecified: a `)`
/// with no partner is dropped, and an unclosed `(` is flushed to the
/// output along with the remaining operators (`(a+b` gives `ab+(`).
#[must_use]
pub fn convert_to_postfix(expression: &[Token]) -> Vec<Token> {
    shunting_yard(expression.iter().copied())
}

/// Converts an infix token sequence to prefix order.
///
/// Reverses the input, swaps `(` and `)`, converts to postfix and reverses
/// the result. The postfix pass still pops on `>=`, so an unparenthesized
/// chain of equal-precedence operators groups to the right here:
/// `a-b-c` becomes `-a-bc`.
#[must_use]
pub fn convert_to_prefix(expression: &[Token]) -> Vec<Token> {
    let mut output = shunting_yard(expression.iter().rev().map(|t| t.mirrored()));
    output.reverse();
    output
}

fn shunting_yard<I>(tokens: I) -> Vec<Token>
where
    I: IntoIterator<Item = Token>,
{
    let mut output = Vec::new();
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Operand(_) => output.push(token),
            Token::Operator(op) => {
                while let Some(&Token::Operator(top)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    output.push(Token::Operator(top));
                    stack.pop();
                }
                stack.push(token);
            }
            Token::LeftParen => stack.push(token),
            Token::RightParen => {
                while let Some(&top) = stack.last() {
                    if top.is_left_paren() {
                        break;
                    }
                    output.push(top);
                    stack.pop();
                }
                // Discards the matching '(' (no-op when the stack ran dry)
                stack.pop();
            }
        }
        trace!(%token, stack = stack.len(), output = output.len(), "shunting");
    }

    output.extend(stack.into_iter().rev());
    output
}

/// Checks that every `)` closes an earlier `(` and nothing is left open
fn check_balanced(tokens: &[Token]) -> AlgoResult<()> {
    let mut open = Vec::new();
    for (position, token) in tokens.iter().enumerate() {
        match token {
            Token::LeftParen => open.push(position),
            Token::RightParen => {
                if open.pop().is_none() {
                    return Err(AlgoError::UnbalancedParentheses { position });
                }
            }
            _ => {}
        }
    }
    match open.pop() {
        Some(position) => Err(AlgoError::UnbalancedParentheses { position }),
        None => Ok(()),
    }
}

/// Checks that operands and operators alternate, with parentheses only
/// where an operand (`(`) or an operator (`)`) may follow
fn check_adjacency(tokens: &[Token]) -> AlgoResult<()> {
    let mut expect_operand = true;
    for (position, token) in tokens.iter().enumerate() {
        let accepted = match (expect_operand, token) {
            (true, Token::Operand(_)) | (false, Token::Operator(_)) => {
                expect_operand = !expect_operand;
                true
            }
            (true, Token::LeftParen) | (false, Token::RightParen) => true,
            _ => false,
        };
        if !accepted {
            return Err(AlgoError::UnexpectedToken {
                token: token.as_char(),
                position,
            });
        }
    }
    if expect_operand {
        return Err(AlgoError::malformed("expression ends without an operand"));
    }
    Ok(())
}

/// Both notations of one infix expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    /// The input exactly as given
    pub infix: String,
    /// Prefix (Polish) form
    pub prefix: Expression,
    /// Postfix (reverse Polish) form
    pub postfix: Expression,
}

/// Expression converter with a configurable validation mode
///
/// # Example
///
/// ```rust
/// use algodemo::expression::Converter;
///
/// let converter = Converter::lenient();
/// assert_eq!(converter.postfix_str("a+b*c").unwrap(), "abc*+");
/// assert_eq!(converter.prefix_str("a+b*c").unwrap(), "+a*bc");
///
/// assert!(Converter::strict().postfix_str("(a+b").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    mode: Mode,
}

impl Converter {
    /// Creates a converter that drops unknown characters and never fails
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            mode: Mode::Lenient,
        }
    }

    /// Creates a converter that rejects malformed input: empty input,
    /// stray characters, unbalanced parentheses and misplaced tokens
    #[must_use]
    pub const fn strict() -> Self {
        Self { mode: Mode::Strict }
    }

    /// Creates a converter with the given mode
    #[must_use]
    pub const fn with_mode(mode: Mode) -> Self {
        Self { mode }
    }

    /// Returns the validation mode
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Tokenizes an infix string according to the mode
    pub fn tokenize(&self, input: &str) -> AlgoResult<Vec<Token>> {
        Tokenizer::with_mode(input, self.mode).tokenize()
    }

    /// Converts infix tokens to postfix
    pub fn to_postfix(&self, tokens: &[Token]) -> AlgoResult<Expression> {
        self.validate(tokens)?;
        Ok(Expression::new(convert_to_postfix(tokens)))
    }

    /// Converts infix tokens to prefix
    pub fn to_prefix(&self, tokens: &[Token]) -> AlgoResult<Expression> {
        self.validate(tokens)?;
        Ok(Expression::new(convert_to_prefix(tokens)))
    }

    /// Converts an infix string to a postfix string
    pub fn postfix_str(&self, input: &str) -> AlgoResult<String> {
        let tokens = self.tokenize(input)?;
        Ok(self.to_postfix(&tokens)?.to_string())
    }

    /// Converts an infix string to a prefix string
    pub fn prefix_str(&self, input: &str) -> AlgoResult<String> {
        let tokens = self.tokenize(input)?;
        Ok(self.to_prefix(&tokens)?.to_string())
    }

    /// Converts an infix string to both notations
    pub fn convert(&self, input: &str) -> AlgoResult<Conversion> {
        let tokens = self.tokenize(input)?;
        Ok(Conversion {
            infix: input.to_string(),
            prefix: self.to_prefix(&tokens)?,
            postfix: self.to_postfix(&tokens)?,
        })
    }

    fn validate(&self, tokens: &[Token]) -> AlgoResult<()> {
        if self.mode == Mode::Lenient {
            return Ok(());
        }
        if tokens.is_empty() {
            return Err(AlgoError::EmptyExpression);
        }
        check_balanced(tokens)?;
        check_adjacency(tokens)
    }
}
