//! Helper functions for middleware

use actix_web::http::header::HeaderMap;

/// Extract the session token from headers
///
/// Looks at `Authorization: Session <token>` first, then the session cookie.
pub fn extract_session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(auth_str) = headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
    {
        if let Some(stripped) = auth_str.strip_prefix("Session ") {
            return Some(stripped.trim().to_string()).filter(|t| !t.is_empty());
        }
    }

    for cookie_header in headers.get_all("cookie") {
        let Ok(cookie_str) = cookie_header.to_str() else {
            continue;
        };
        for cookie in cookie_str.split(';') {
            if let Some((name, value)) = cookie.trim().split_once('=') {
                if name == cookie_name && !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }

    None
}
