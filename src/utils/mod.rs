//! Utility modules for the gate
//!
//! - **error**: error type, result alias and HTTP mapping

pub mod error;

/// Shorten a session token for log output
///
/// Tokens are bearer credentials, so only a short prefix ever reaches the logs.
pub fn redact_token(token: &str) -> String {
    let prefix: String = token.chars().take(8).collect();
    if prefix.len() < token.len() {
        format!("{}…", prefix)
    } else {
        "[REDACTED]".to_string()
    }
}
