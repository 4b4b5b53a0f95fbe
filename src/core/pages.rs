//! Page catalog
//!
//! Pages are the protected resource type of the gate. Each page has an owner;
//! whether a user acts on their own page or someone else's decides which
//! ownership qualifier the policy engine checks.

use crate::utils::error::{GateError, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Resource type name under which pages are granted
pub const PAGE_RESOURCE: &str = "page";

/// A page owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    /// Username of the owner
    pub owner: String,
}

impl Page {
    pub fn new(title: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            owner: owner.into(),
        }
    }
}

/// The demo pages, one per default account
pub fn default_pages() -> Vec<Page> {
    vec![
        Page::new("Admin's page", "admin"),
        Page::new("User's page", "user"),
    ]
}

/// Shared page catalog
///
/// The set of pages is fixed at startup; only titles can change.
#[derive(Debug, Default)]
pub struct PageCatalog {
    pages: RwLock<Vec<Page>>,
}

impl PageCatalog {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages: RwLock::new(pages),
        }
    }

    /// Snapshot of all pages in catalog order
    pub fn list(&self) -> Vec<Page> {
        self.pages.read().clone()
    }

    pub fn get(&self, index: usize) -> Result<Page> {
        self.pages
            .read()
            .get(index)
            .cloned()
            .ok_or_else(|| GateError::resource_not_found(format!("page {}", index)))
    }

    /// Replace the title of a page, returning the updated page
    pub fn retitle(&self, index: usize, title: impl Into<String>) -> Result<Page> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(GateError::validation("Page title cannot be empty"));
        }

        let mut pages = self.pages.write();
        let page = pages
            .get_mut(index)
            .ok_or_else(|| GateError::resource_not_found(format!("page {}", index)))?;
        page.title = title;
        debug!(index, owner = %page.owner, "Page retitled");
        Ok(page.clone())
    }

    pub fn len(&self) -> usize {
        self.pages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.read().is_empty()
    }
}
