//! Helper functions for creating specific error types

use super::types::GateError;

impl GateError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn not_found<S: Into<String>>(username: S) -> Self {
        Self::NotFound(username.into())
    }

    pub fn invalid_credentials<S: Into<String>>(username: S) -> Self {
        Self::InvalidCredentials(username.into())
    }

    pub fn invalid_session<S: Into<String>>(message: S) -> Self {
        Self::InvalidSession(message.into())
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn permission_denied<S: Into<String>>(message: S) -> Self {
        Self::PermissionDenied(message.into())
    }

    pub fn resource_not_found<S: Into<String>>(message: S) -> Self {
        Self::ResourceNotFound(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store(message.into())
    }

    pub fn crypto<S: Into<String>>(message: S) -> Self {
        Self::Crypto(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the error comes from a failed login attempt
    pub fn is_login_failure(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::InvalidCredentials(_))
    }
}
