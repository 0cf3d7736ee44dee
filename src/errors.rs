//! Error types for Sehat Saathi
//!
//! The triage evaluator is total and never produces one of these; they cover
//! the storage, configuration and reminder-editing paths.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum SehatError {
    /// Key-value store failures that are not plain I/O
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reminder fields that do not parse as a calendar date or clock time
    #[error("Invalid reminder: {0}")]
    InvalidReminder(String),
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, SehatError>;
