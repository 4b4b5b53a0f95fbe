//! Auth service: login, logout and session resolution

use super::password::verify_password;
use super::session::SessionStore;
use super::types::{AuthInfo, PublicUser, User};
use super::users::UserDirectory;
use crate::config::AuthConfig;
use crate::utils::error::{GateError, Result};
use crate::utils::redact_token;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Attempts at drawing a token the store accepts before giving up
const MAX_TOKEN_ATTEMPTS: usize = 3;

/// Main authentication system
#[derive(Clone)]
pub struct AuthSystem {
    /// Users known at startup
    users: Arc<UserDirectory>,
    /// Token → user mapping
    store: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for AuthSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSystem")
            .field("users", &self.users.len())
            .finish_non_exhaustive()
    }
}

impl AuthSystem {
    /// Create the auth system, hashing the configured users' passwords
    pub fn new(config: &AuthConfig, store: Arc<dyn SessionStore>) -> Result<Self> {
        info!("Initializing authentication system");

        let users = UserDirectory::from_config(&config.users)?;

        info!("Authentication system initialized with {} users", users.len());
        Ok(Self {
            users: Arc::new(users),
            store,
        })
    }

    /// Find a user by username
    pub fn find_user_by_username(&self, username: &str) -> Option<&User> {
        self.users.find_by_username(username).map(|(_, user)| user)
    }

    /// Log a user in and open a session
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthInfo> {
        info!("User login attempt: {}", username);

        let (index, user) = self.users.find_by_username(username).ok_or_else(|| {
            warn!("Login attempt with unknown username: {}", username);
            GateError::not_found(username)
        })?;

        if !verify_password(password, &user.password_hash)? {
            warn!("Login attempt with invalid password for user: {}", username);
            return Err(GateError::invalid_credentials(username));
        }

        for _ in 0..MAX_TOKEN_ATTEMPTS {
            let token = Uuid::new_v4().to_string();
            if self.store.put(&token, index).await? {
                info!(token = %redact_token(&token), "User logged in successfully: {}", username);
                return Ok(AuthInfo {
                    token,
                    user: PublicUser::from(user),
                });
            }
            debug!("Generated token already bound, drawing another");
        }

        Err(GateError::internal("Could not allocate a fresh session token"))
    }

    /// Close the session bound to `token`
    ///
    /// Unknown tokens and store failures are logged and otherwise ignored.
    pub async fn logout(&self, token: &str) {
        match self.store.delete(token).await {
            Ok(true) => info!(token = %redact_token(token), "Session closed"),
            Ok(false) => debug!(token = %redact_token(token), "Logout for unknown session"),
            Err(e) => warn!(token = %redact_token(token), "Failed to close session: {}", e),
        }
    }

    /// Resolve the user a token belongs to
    pub async fn resolve_session(&self, token: &str) -> Result<PublicUser> {
        let index = self
            .store
            .get(token)
            .await?
            .ok_or_else(|| GateError::invalid_session("Token does not exist"))?;

        let user = self.users.get(index).ok_or_else(|| {
            warn!(index, "Session points at a missing user");
            GateError::invalid_session("Session user no longer exists")
        })?;

        debug!(user = %user.username, "Session resolved");
        Ok(PublicUser::from(user))
    }
}
