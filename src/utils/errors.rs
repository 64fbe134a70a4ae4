//! Error handling for QuizBuddy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for QuizBuddy application
#[derive(Error, Debug)]
pub enum QuizBuddyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Session storage error: {0}")]
    Storage(String),
}

/// Rejection of an incoming answer.
///
/// The `Display` text is sent to the user verbatim, so it must stay stable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("Invalid question ID.")]
    InvalidQuestionId { question_id: usize },

    #[error("Invalid answer. Please choose from the provided options.")]
    InvalidAnswer { question_id: usize },
}

/// Result type alias for QuizBuddy operations
pub type Result<T> = std::result::Result<T, QuizBuddyError>;

impl QuizBuddyError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            QuizBuddyError::Config(_) => false,
            QuizBuddyError::Redis(_) => true,
            QuizBuddyError::Serialization(_) => false,
            QuizBuddyError::CatalogParse(_) => false,
            QuizBuddyError::Io(_) => true,
            QuizBuddyError::InvalidInput(_) => false,
            QuizBuddyError::Storage(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            QuizBuddyError::Config(_) => ErrorSeverity::Critical,
            QuizBuddyError::CatalogParse(_) => ErrorSeverity::Critical,
            QuizBuddyError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
