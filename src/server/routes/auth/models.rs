//! Request models for authentication endpoints

use serde::Deserialize;

/// User login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
