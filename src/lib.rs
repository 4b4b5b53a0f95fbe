//! # rbac-gate
//!
//! Token-based session authentication and role-based access control for
//! server-rendered web applications.
//!
//! ## Features
//!
//! - **Sessions**: opaque tokens carried in an `HttpOnly` cookie, resolved
//!   through a pluggable [`SessionStore`](auth::session::SessionStore)
//! - **RBAC**: role → resource → action grants with `own` / `any` ownership
//!   qualifiers
//! - **Access gate**: wrap page computations with [`with_rbac`] to get 401
//!   flagging plus a re-check against the live session at response time
//! - **HTTP surface**: actix-web server with login, logout and session routes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rbac_gate::{Config, server::run_server};
//!
//! #[tokio::main]
//! async fn main() -> rbac_gate::Result<()> {
//!     run_server(Config::default()).await
//! }
//! ```

#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use auth::{AuthSystem, PublicUser, RequestContext, UserGroup, with_rbac};
pub use config::Config;
pub use utils::error::{GateError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gate build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
        }
    }
}

/// Build information of the running binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
