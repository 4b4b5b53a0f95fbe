//! Configuration data models
//!
//! This module defines all configuration structures used by the gate.

pub mod auth;
pub mod logging;
pub mod rbac;
pub mod server;

pub use auth::*;
pub use logging::*;
pub use rbac::*;
pub use server::*;

/// Default server host
pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3000
}

/// Default session cookie name
pub fn default_cookie_name() -> String {
    "token".to_string()
}

/// Default advisory cookie lifetime in seconds (24 hours)
pub fn default_cookie_max_age() -> u64 {
    60 * 60 * 24
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
