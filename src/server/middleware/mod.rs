//! HTTP middleware implementations
//!
//! - Session resolution from the session cookie
//! - Grant checks against the RBAC policy

mod helpers;
mod rbac;
mod session;


pub use helpers::extract_session_token;
pub use rbac::{RbacMiddleware, RbacMiddlewareService};
pub use session::{SessionMiddleware, SessionMiddlewareService, get_request_context};
