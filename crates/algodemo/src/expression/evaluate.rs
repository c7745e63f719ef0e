//! Numeric evaluation of postfix / prefix sequences and the postfix → infix inverse

use super::token::{Operator, Token};
use super::Expression;
use crate::core::{AlgoError, AlgoResult};

/// Value of a decimal digit operand, `None` for letters
#[must_use]
pub fn digit_value(ch: char) -> Option<f64> {
    ch.to_digit(10).map(f64::from)
}

/// Evaluates a postfix sequence, resolving operands through `lookup`
///
/// ```rust
/// use algodemo::expression::{digit_value, evaluate_postfix, Expression};
///
/// let postfix = Expression::parse_lenient("23*4+");
/// assert_eq!(evaluate_postfix(postfix.tokens(), digit_value), Ok(10.0));
/// ```
pub fn evaluate_postfix<F>(tokens: &[Token], lookup: F) -> AlgoResult<f64>
where
    F: Fn(char) -> Option<f64>,
{
    let mut stack = Vec::new();
    for token in tokens {
        match *token {
            Token::Operand(ch) => stack.push(lookup(ch).ok_or(AlgoError::UnknownOperand(ch))?),
            Token::Operator(op) => {
                let (right, left) = pop_pair(&mut stack, op)?;
                stack.push(op.apply(left, right)?);
            }
            Token::LeftParen | Token::RightParen => {
                return Err(AlgoError::malformed("parenthesis in postfix expression"));
            }
        }
    }
    single_result(stack)
}

/// Evaluates a prefix sequence by scanning it right to left
pub fn evaluate_prefix<F>(tokens: &[Token], lookup: F) -> AlgoResult<f64>
where
    F: Fn(char) -> Option<f64>,
{
    let mut stack = Vec::new();
    for token in tokens.iter().rev() {
        match *token {
            Token::Operand(ch) => stack.push(lookup(ch).ok_or(AlgoError::UnknownOperand(ch))?),
            Token::Operator(op) => {
                let (left, right) = pop_pair(&mut stack, op)?;
                stack.push(op.apply(left, right)?);
            }
            Token::LeftParen | Token::RightParen => {
                return Err(AlgoError::malformed("parenthesis in prefix expression"));
            }
        }
    }
    single_result(stack)
}

/// Rebuilds a fully parenthesized infix expression from postfix
///
/// `ab+c*` becomes `((a+b)*c)`. A lone operand is returned unwrapped.
pub fn postfix_to_infix(tokens: &[Token]) -> AlgoResult<Expression> {
    let mut stack: Vec<Vec<Token>> = Vec::new();
    for token in tokens {
        match *token {
            Token::Operand(_) => stack.push(vec![*token]),
            Token::Operator(op) => {
                let (right, left) = pop_pair(&mut stack, op)?;
                let mut grouped = Vec::with_capacity(left.len() + right.len() + 3);
                grouped.push(Token::LeftParen);
                grouped.extend(left);
                grouped.push(*token);
                grouped.extend(right);
                grouped.push(Token::RightParen);
                stack.push(grouped);
            }
            Token::LeftParen | Token::RightParen => {
                return Err(AlgoError::malformed("parenthesis in postfix expression"));
            }
        }
    }
    single_result(stack).map(Expression::new)
}

fn pop_pair<T>(stack: &mut Vec<T>, op: Operator) -> AlgoResult<(T, T)> {
    let first = stack.pop().ok_or(AlgoError::MissingOperand(op.symbol()))?;
    let second = stack.pop().ok_or(AlgoError::MissingOperand(op.symbol()))?;
    Ok((first, second))
}

fn single_result<T>(mut stack: Vec<T>) -> AlgoResult<T> {
    match stack.len() {
        0 => Err(AlgoError::EmptyExpression),
        1 => stack.pop().ok_or(AlgoError::EmptyExpression),
        n => Err(AlgoError::malformed(format!(
            "{n} operands left without an operator"
        ))),
    }
}
