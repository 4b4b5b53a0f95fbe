//! Session store trait

use crate::auth::users::UserIndex;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Token → user index mapping shared by every request
///
/// Implementations must be safe for concurrent use; actix-web calls into the
/// store from several worker threads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Look up the user index a token maps to
    async fn get(&self, token: &str) -> Result<Option<UserIndex>>;

    /// Record a new session
    ///
    /// Returns `false` without touching the store when the token is live or
    /// was revoked before.
    async fn put(&self, token: &str, user: UserIndex) -> Result<bool>;

    /// Remove a session, returning whether it existed
    async fn delete(&self, token: &str) -> Result<bool>;
}
