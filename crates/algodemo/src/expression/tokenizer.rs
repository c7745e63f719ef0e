//! Character-level tokenizer

use super::token::Token;
use super::Mode;
use crate::core::{AlgoError, AlgoResult};
use tracing::debug;

/// Tokenizer for converting expression strings to tokens
///
/// Every token is one character. In [`Mode::Lenient`] anything outside the
/// token set is dropped without a trace in the output; in [`Mode::Strict`]
/// whitespace is skipped and any other stray character is an error.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    mode: Mode,
}

impl<'a> Tokenizer<'a> {
    /// Creates a lenient tokenizer for the given input
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            mode: Mode::Lenient,
        }
    }

    /// Creates a tokenizer with an explicit mode
    #[must_use]
    pub const fn with_mode(input: &'a str, mode: Mode) -> Self {
        Self { input, mode }
    }

    /// Tokenizes the entire input
    pub fn tokenize(&self) -> AlgoResult<Vec<Token>> {
        let mut tokens = Vec::with_capacity(self.input.len());
        for (position, ch) in self.input.chars().enumerate() {
            if let Some(token) = Token::classify(ch) {
                tokens.push(token);
                continue;
            }
            if ch.is_whitespace() {
                continue;
            }
            match self.mode {
                Mode::Strict => return Err(AlgoError::UnexpectedCharacter { ch, position }),
                Mode::Lenient => {
                    debug!(%ch, position, "dropping unrecognized character");
                }
            }
        }
        Ok(tokens)
    }
}
