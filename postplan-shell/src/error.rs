//! Error types for postplan-shell
//!
//! Wraps core library errors and stdin/stdout failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    /// Core library error
    #[error(transparent)]
    Core(#[from] libpostplan::PostplanError),

    /// Reading commands or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ShellError::Core(e) => e.exit_code(),
            ShellError::Io(_) => 1,
        }
    }
}

/// Result type for shell operations
pub type Result<T> = std::result::Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;
    use libpostplan::{ConfigError, PostplanError};

    #[test]
    fn test_exit_code_follows_core_error() {
        let err: ShellError = PostplanError::InvalidInput("x".to_string()).into();
        assert_eq!(err.exit_code(), 3);

        let err: ShellError = PostplanError::from(ConfigError::MissingField("f".to_string())).into();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_core_error_message_is_transparent() {
        let err: ShellError = PostplanError::InvalidInput("bad id".to_string()).into();
        assert_eq!(err.to_string(), "Invalid input: bad id");
    }
}
