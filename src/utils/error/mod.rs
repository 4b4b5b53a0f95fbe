//! Error handling for the gate
//!
//! This module defines the error type shared by the auth service, the policy
//! engine and the HTTP layer.

mod helpers;
mod response;
mod types;

pub use response::{
    ErrorResponse, LOGIN_FAILED_MESSAGE, NOT_AUTHORIZED_MESSAGE, NOT_ENOUGH_PERMISSIONS_MESSAGE,
};
pub use types::{GateError, Result};
