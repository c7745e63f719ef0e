//! Property-based tests for expression conversion
//!
//! Generated expressions are fully parenthesized trees over the digits
//! 1-9, so every notation has exactly one reading and can be checked
//! numerically against a direct evaluation of the tree.

#![allow(clippy::unwrap_used)]

use algodemo::expression::{
    convert_to_postfix, convert_to_prefix, digit_value, evaluate_postfix, evaluate_prefix,
    postfix_to_infix, Converter, Expression, Token,
};
use algodemo::prelude::AlgoError;
use proptest::prelude::*;

// ===== Strategy definitions =====

#[derive(Debug, Clone)]
enum Tree {
    Leaf(u8),
    Node(Box<Tree>, char, Box<Tree>),
}

impl Tree {
    /// Every binary node wrapped in parentheses, root included
    fn infix(&self) -> String {
        match self {
            Self::Leaf(d) => d.to_string(),
            Self::Node(l, op, r) => format!("({}{}{})", l.infix(), op, r.infix()),
        }
    }

    /// Direct evaluation; `None` on division by zero
    fn eval(&self) -> Option<f64> {
        match self {
            Self::Leaf(d) => Some(f64::from(*d)),
            Self::Node(l, op, r) => {
                let (a, b) = (l.eval()?, r.eval()?);
                match op {
                    '+' => Some(a + b),
                    '-' => Some(a - b),
                    '*' => Some(a * b),
                    _ => (b != 0.0).then(|| a / b),
                }
            }
        }
    }
}

/// Generate any supported operator symbol
fn operator_strategy() -> impl Strategy<Value = char> {
    prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')]
}

/// Generate fully parenthesized expression trees
fn tree_strategy() -> impl Strategy<Value = Tree> {
    let leaf = (1u8..=9u8).prop_map(Tree::Leaf);
    leaf.prop_recursive(4, 32, 2, |inner| {
        (inner.clone(), operator_strategy(), inner)
            .prop_map(|(l, op, r)| Tree::Node(Box::new(l), op, Box::new(r)))
    })
}

/// Generate arbitrary text drawn from the token set plus noise
fn noisy_infix_strategy() -> impl Strategy<Value = String> {
    "[a-d0-9+*/()^ %-]{0,24}"
}

fn tokens(input: &str) -> Vec<Token> {
    Expression::parse_lenient(input).into_tokens()
}

fn count<F: Fn(&Token) -> bool>(tokens: &[Token], pred: F) -> usize {
    tokens.iter().filter(|t| pred(t)).count()
}

// ===== Numeric equivalence =====

proptest! {
    /// Postfix evaluation agrees with evaluating the infix tree
    #[test]
    fn prop_postfix_preserves_value(tree in tree_strategy()) {
        let postfix = convert_to_postfix(&tokens(&tree.infix()));
        match tree.eval() {
            Some(expected) => prop_assert_eq!(evaluate_postfix(&postfix, digit_value), Ok(expected)),
            None => prop_assert_eq!(
                evaluate_postfix(&postfix, digit_value),
                Err(AlgoError::DivisionByZero)
            ),
        }
    }

    /// Prefix evaluation agrees with evaluating the infix tree
    #[test]
    fn prop_prefix_preserves_value(tree in tree_strategy()) {
        let prefix = convert_to_prefix(&tokens(&tree.infix()));
        if let Some(expected) = tree.eval() {
            prop_assert_eq!(evaluate_prefix(&prefix, digit_value), Ok(expected));
        }
    }
}

// ===== Structural invariants =====

proptest! {
    /// Operands keep their input order in both notations
    #[test]
    fn prop_operand_order_preserved(tree in tree_strategy()) {
        let infix = Expression::parse_lenient(&tree.infix());
        let postfix = Expression::new(convert_to_postfix(infix.tokens()));
        let prefix = Expression::new(convert_to_prefix(infix.tokens()));
        let expected: String = infix.operands().collect();
        prop_assert_eq!(postfix.operands().collect::<String>(), expected.clone());
        prop_assert_eq!(prefix.operands().collect::<String>(), expected);
    }

    /// Balanced input never leaves parentheses in the output
    #[test]
    fn prop_no_parentheses_in_output(tree in tree_strategy()) {
        let infix = tokens(&tree.infix());
        for out in [convert_to_postfix(&infix), convert_to_prefix(&infix)] {
            prop_assert!(out.iter().all(|t| t.is_operand() || t.is_operator()));
        }
    }

    /// Postfix -> fully parenthesized infix -> postfix is the identity
    #[test]
    fn prop_postfix_infix_round_trip(tree in tree_strategy()) {
        let postfix = convert_to_postfix(&tokens(&tree.infix()));
        let infix = postfix_to_infix(&postfix).unwrap();
        prop_assert_eq!(convert_to_postfix(infix.tokens()), postfix);
    }

    /// The rebuilt infix is exactly the generated fully parenthesized text
    #[test]
    fn prop_postfix_to_infix_restores_text(tree in tree_strategy()) {
        let postfix = convert_to_postfix(&tokens(&tree.infix()));
        prop_assert_eq!(postfix_to_infix(&postfix).unwrap().to_string(), tree.infix());
    }

    /// Strict mode accepts well-formed input and agrees with lenient mode
    #[test]
    fn prop_strict_agrees_on_valid_input(tree in tree_strategy()) {
        let infix = tree.infix();
        prop_assert_eq!(
            Converter::strict().convert(&infix).unwrap(),
            Converter::lenient().convert(&infix).unwrap()
        );
    }
}

// ===== Arbitrary (possibly malformed) input =====

proptest! {
    /// Lenient conversion never panics and never loses operands or operators
    #[test]
    fn prop_lenient_keeps_every_operand_and_operator(input in noisy_infix_strategy()) {
        let infix = tokens(&input);
        for out in [convert_to_postfix(&infix), convert_to_prefix(&infix)] {
            prop_assert_eq!(count(&out, Token::is_operand), count(&infix, Token::is_operand));
            prop_assert_eq!(count(&out, Token::is_operator), count(&infix, Token::is_operator));
        }
    }

    /// Strict conversion either succeeds or reports an error, never panics
    #[test]
    fn prop_strict_total(input in noisy_infix_strategy()) {
        let result = Converter::strict().convert(&input);
        if let Err(err) = result {
            prop_assert!(err.is_expression_error());
        }
    }
}
