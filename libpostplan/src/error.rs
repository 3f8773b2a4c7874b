//! Error types for Postplan

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PostplanError>;

#[derive(Error, Debug)]
pub enum PostplanError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PostplanError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PostplanError::Validation(_) => 3,
            PostplanError::InvalidInput(_) => 3,
            PostplanError::Config(_) => 1,
        }
    }
}

/// Rejections raised when a draft is turned into a post.
///
/// Content is checked before platforms, so a draft that is empty on both
/// counts reports `EmptyContent`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Content cannot be empty")]
    EmptyContent,

    #[error("Select at least one platform")]
    NoPlatformSelected,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    Invalid(String),
}
