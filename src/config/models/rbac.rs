//! Access policy configuration

use crate::auth::rbac::{Grant, default_grants};
use crate::core::pages::{Page, default_pages};
use serde::{Deserialize, Serialize};

/// RBAC configuration
///
/// The grant table is read once at startup; the engine never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Grant table, one entry per (role, resource, permission)
    #[serde(default = "default_grants")]
    pub grants: Vec<Grant>,
    /// Page catalog served by the gated index page
    #[serde(default = "default_pages")]
    pub pages: Vec<Page>,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            grants: default_grants(),
            pages: default_pages(),
        }
    }
}

impl RbacConfig {
    /// Validate RBAC configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(grant) = self.grants.iter().find(|g| g.resource.is_empty()) {
            return Err(format!("Grant for role {} has an empty resource", grant.role));
        }

        if let Some(page) = self.pages.iter().find(|p| p.owner.is_empty()) {
            return Err(format!("Page '{}' has no owner", page.title));
        }

        Ok(())
    }
}
