//! Application state shared across HTTP handlers

use crate::auth::AuthSystem;
use crate::auth::rbac::RbacPolicy;
use crate::auth::session::{InMemorySessionStore, SessionStore};
use crate::config::Config;
use crate::core::PageCatalog;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for sharing across worker threads.
#[derive(Clone)]
pub struct AppState {
    /// Gate configuration (shared read-only)
    pub config: Arc<Config>,
    /// Authentication system
    pub auth: Arc<AuthSystem>,
    /// Grant table
    pub rbac: Arc<RbacPolicy>,
    /// Protected pages
    pub pages: Arc<PageCatalog>,
}

impl AppState {
    /// Create the state on top of a session store
    pub fn new(config: Config, store: Arc<dyn SessionStore>) -> Result<Self> {
        let auth = AuthSystem::new(config.auth(), store)?;
        let rbac = RbacPolicy::from_config(config.rbac());
        let pages = PageCatalog::new(config.rbac().pages.clone());

        Ok(Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            rbac: Arc::new(rbac),
            pages: Arc::new(pages),
        })
    }

    /// Create the state with the process-local session store
    pub fn in_memory(config: Config) -> Result<Self> {
        Self::new(config, Arc::new(InMemorySessionStore::new()))
    }

    /// Get gate configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
