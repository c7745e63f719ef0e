//! Error types shared by every algorithm module
//!
//! All fallible operations return [`AlgoResult`]. The lenient expression
//! converter never fails; everything else reports through [`AlgoError`].

use thiserror::Error;

/// Result type for algorithm operations
pub type AlgoResult<T> = Result<T, AlgoError>;

/// Algorithm error types - exhaustive enum ensures all cases handled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgoError {
    /// Empty expression provided
    #[error("Empty expression")]
    EmptyExpression,

    /// Character that is neither an operand, operator nor parenthesis
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter {
        /// The offending character
        ch: char,
        /// Character index in the input
        position: usize,
    },

    /// A `)` without a matching `(`, or a `(` that is never closed
    #[error("Unbalanced parentheses at token {position}")]
    UnbalancedParentheses {
        /// Token index of the unmatched parenthesis
        position: usize,
    },

    /// Operand, operator or parenthesis in a position the grammar forbids
    #[error("Unexpected token '{token}' at token {position}")]
    UnexpectedToken {
        /// The misplaced token
        token: char,
        /// Token index of the misplaced token
        position: usize,
    },

    /// Operand with no value bound to it during evaluation
    #[error("Unknown operand '{0}'")]
    UnknownOperand(char),

    /// Operator found fewer than two operands on the evaluation stack
    #[error("Operator '{0}' is missing an operand")]
    MissingOperand(char),

    /// Token sequence is not a well-formed expression in the expected notation
    #[error("Malformed expression: {0}")]
    MalformedExpression(String),

    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,

    /// Heap kind other than `min` or `max`
    #[error("Invalid heap type '{0}'! Use 'min' or 'max'.")]
    InvalidHeapKind(String),

    /// Adjacency matrix that is not square
    #[error("Invalid adjacency matrix: {0}")]
    InvalidMatrix(String),

    /// Graph vertex outside `0..vertices`
    #[error("Node {node} is out of range for a graph with {vertices} vertices")]
    NodeOutOfRange {
        /// Requested vertex
        node: usize,
        /// Number of vertices in the graph
        vertices: usize,
    },
}

impl AlgoError {
    /// Create a malformed expression error
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedExpression(message.into())
    }

    /// Create an invalid matrix error
    #[must_use]
    pub fn invalid_matrix(message: impl Into<String>) -> Self {
        Self::InvalidMatrix(message.into())
    }

    /// Returns true if this error came from expression handling
    #[must_use]
    pub const fn is_expression_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyExpression
                | Self::UnexpectedCharacter { .. }
                | Self::UnbalancedParentheses { .. }
                | Self::UnexpectedToken { .. }
                | Self::UnknownOperand(_)
                | Self::MissingOperand(_)
                | Self::MalformedExpression(_)
                | Self::DivisionByZero
        )
    }
}
