//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Algorithm library error
    #[error("{0}")]
    Algorithm(#[from] algodemo::core::AlgoError),

    /// JSON rendering error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Console input that could not be parsed
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Returns true if the error is recoverable inside the interactive menu
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Algorithm(_) | Self::InvalidInput { .. })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use algodemo::core::AlgoError;

    #[test]
    fn test_invalid_input_error() {
        let err = CliError::invalid_input("bad number");
        assert!(err.to_string().contains("Invalid input"));
        assert!(err.to_string().contains("bad number"));
        assert!(err.is_user_error());
    }

    #[test]
    fn test_algorithm_error_from() {
        let err: CliError = AlgoError::DivisionByZero.into();
        assert_eq!(err.to_string(), "Division by zero");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cli_err: CliError = io_err.into();
        assert!(cli_err.to_string().contains("I/O"));
        assert!(!cli_err.is_user_error());
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let cli_err: CliError = json_err.into();
        assert!(cli_err.to_string().contains("JSON"));
    }
}
