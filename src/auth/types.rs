//! Authentication types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Group a user belongs to; doubles as the user's RBAC role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserGroup {
    Admin,
    User,
}

impl UserGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserGroup::Admin => "admin",
            UserGroup::User => "user",
        }
    }
}

impl fmt::Display for UserGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user with their password hash
///
/// Never serialized; everything leaving the auth service is a [`PublicUser`].
#[derive(Clone)]
pub struct User {
    pub username: String,
    pub(crate) password_hash: String,
    pub group: UserGroup,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .field("group", &self.group)
            .finish()
    }
}

/// User record with the password stripped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub username: String,
    pub group: UserGroup,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            group: user.group,
        }
    }
}

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthInfo {
    pub token: String,
    pub user: PublicUser,
}

/// Per-request session context
///
/// Populated from the session cookie before a handler runs and handed to it
/// explicitly. Both fields are `None` for anonymous requests; `user` is only
/// set when `token` resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub user: Option<PublicUser>,
    pub token: Option<String>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user: PublicUser, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
