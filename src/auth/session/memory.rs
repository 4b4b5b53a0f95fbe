//! In-memory session store

use super::store::SessionStore;
use crate::auth::users::UserIndex;
use crate::utils::error::Result;
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::{DashMap, DashSet};
use parking_lot::Mutex;
use std::collections::VecDeque;
use tracing::debug;

/// Revoked tokens remembered by default
pub const DEFAULT_TOMBSTONE_CAPACITY: usize = 65_536;

/// Process-wide session store, reset on restart
///
/// The most recently revoked tokens are remembered so they cannot be bound
/// again. Older tombstones are evicted first once the capacity is reached;
/// tokens are random UUIDs, so an evicted token is not expected to come back.
#[derive(Debug)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, UserIndex>,
    revoked: DashSet<String>,
    /// Revocation order, oldest first
    revoked_order: Mutex<VecDeque<String>>,
    tombstone_capacity: usize,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::with_tombstone_capacity(DEFAULT_TOMBSTONE_CAPACITY)
    }
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tombstone_capacity(capacity: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            revoked: DashSet::new(),
            revoked_order: Mutex::new(VecDeque::new()),
            tombstone_capacity: capacity,
        }
    }

    /// Number of remembered revoked tokens
    pub fn tombstone_count(&self) -> usize {
        self.revoked.len()
    }

    fn remember_revoked(&self, token: &str) {
        if !self.revoked.insert(token.to_string()) {
            return;
        }

        let mut order = self.revoked_order.lock();
        order.push_back(token.to_string());
        while order.len() > self.tombstone_capacity {
            if let Some(oldest) = order.pop_front() {
                self.revoked.remove(&oldest);
            }
        }
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn is_revoked(&self, token: &str) -> bool {
        self.revoked.contains(token)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, token: &str) -> Result<Option<UserIndex>> {
        Ok(self.sessions.get(token).map(|entry| *entry.value()))
    }

    async fn put(&self, token: &str, user: UserIndex) -> Result<bool> {
        match self.sessions.entry(token.to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                if self.revoked.contains(token) {
                    debug!("Refusing to rebind a revoked token");
                    return Ok(false);
                }
                slot.insert(user);
                Ok(true)
            }
        }
    }

    async fn delete(&self, token: &str) -> Result<bool> {
        if !self.sessions.contains_key(token) {
            return Ok(false);
        }
        // tombstone first so a concurrent put cannot slip in after the removal
        self.remember_revoked(token);
        Ok(self.sessions.remove(token).is_some())
    }
}
