//! Error types for the CLI application.
//!
//! ## Batch Errors
//!
//! `BatchValidationError<T>` pairs a failed item (a file name, a hand index)
//! with a message. The import command uses it to report engine errors per
//! session file.

use std::fmt;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<crate::config::ConfigError> for CliError {
    fn from(error: crate::config::ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

/// An error tied to the item that produced it.
///
/// # Examples
///
/// ```rust
/// use pokerhud_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: "zoom.txt".to_string(),
///     message: "no hand ID was found".to_string(),
/// };
/// assert_eq!(error.to_string(), "zoom.txt: no hand ID was found");
/// ```
#[derive(Debug)]
pub struct BatchValidationError<T> {
    /// Context identifying the item that failed
    pub item_context: T,
    /// Descriptive error message
    pub message: String,
}

impl<T: std::fmt::Display> std::fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_validation_error_with_usize() {
        let error = BatchValidationError {
            item_context: 42,
            message: "Test error".to_string(),
        };
        assert_eq!(error.to_string(), "42: Test error");
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;
        let err: CliError = std::io::Error::other("disk").into();
        assert!(err.source().is_some());
    }
}
