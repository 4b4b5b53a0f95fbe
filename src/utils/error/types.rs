//! Error types for the gate

use thiserror::Error;

/// Result type alias for the gate
pub type Result<T> = std::result::Result<T, GateError>;

/// Main error type for the gate
#[derive(Error, Debug)]
pub enum GateError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Unknown username at login
    #[error("Cannot find user: {0}")]
    NotFound(String),

    /// Password mismatch at login
    #[error("Wrong password for user: {0}")]
    InvalidCredentials(String),

    /// Token absent from the session store
    #[error("Invalid session: {0}")]
    InvalidSession(String),

    /// Protected operation reached without a session
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Session present but the grant check failed
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Addressed resource does not exist
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Session store backend errors
    #[error("Session store error: {0}")]
    Store(String),

    /// Crypto errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
