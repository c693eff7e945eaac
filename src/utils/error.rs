//! Error Handling
//!
//! Unified error types for the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Required wizard fields missing or empty, reported by field name
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// Guard failures that are not field-indexed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Bulk action attempted with no prospects selected
    #[error("No prospects selected")]
    EmptySelection,

    /// Lookup of an id that does not exist in the store
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failure from an external collaborator, message preserved
    #[error("External service error: {0}")]
    External(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a field-indexed validation failure
    pub fn missing_fields(fields: Vec<String>) -> Self {
        Self::MissingFields(fields)
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an external service error
    pub fn external(msg: impl Into<String>) -> Self {
        Self::External(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Convert AppError to a string suitable for Tauri command responses
impl From<AppError> for String {
    fn from(err: AppError) -> String {
        err.to_string()
    }
}

impl From<leadflow_personalization::PersonalizationError> for AppError {
    fn from(err: leadflow_personalization::PersonalizationError) -> Self {
        Self::Config(err.to_string())
    }
}
