//! HTTP response handling for errors

use super::types::GateError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

/// Message shown for any failed login, whichever half of the credentials was wrong
pub const LOGIN_FAILED_MESSAGE: &str = "Wrong username and/or password";
/// Message shown when a session is missing or unknown
pub const NOT_AUTHORIZED_MESSAGE: &str = "Not Authorized";
/// Message shown when a session lacks the required grant
pub const NOT_ENOUGH_PERMISSIONS_MESSAGE: &str = "Not enough permissions";

impl ResponseError for GateError {
    fn status_code(&self) -> StatusCode {
        match self {
            GateError::NotFound(_)
            | GateError::InvalidCredentials(_)
            | GateError::Validation(_)
            | GateError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GateError::InvalidSession(_) | GateError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            GateError::PermissionDenied(_) => StatusCode::FORBIDDEN,
            GateError::ResourceNotFound(_) => StatusCode::NOT_FOUND,
            GateError::Config(_)
            | GateError::Yaml(_)
            | GateError::Store(_)
            | GateError::Crypto(_)
            | GateError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            GateError::NotFound(_) | GateError::InvalidCredentials(_) => {
                LOGIN_FAILED_MESSAGE.to_string()
            }
            GateError::InvalidSession(_) | GateError::Unauthorized(_) => {
                NOT_AUTHORIZED_MESSAGE.to_string()
            }
            GateError::PermissionDenied(_) => NOT_ENOUGH_PERMISSIONS_MESSAGE.to_string(),
            GateError::ResourceNotFound(_) | GateError::Validation(_) | GateError::BadRequest(_) => {
                self.to_string()
            }
            _ => "An internal error occurred".to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse { message })
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
