//! Authentication configuration

use super::*;
use crate::auth::UserGroup;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Name of the cookie carrying the session token
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Advisory cookie lifetime in seconds
    #[serde(default = "default_cookie_max_age")]
    pub cookie_max_age_secs: u64,
    /// Mark the cookie `Secure`
    #[serde(default)]
    pub cookie_secure: bool,
    /// Users known at process start
    #[serde(default = "default_users")]
    pub users: Vec<UserConfig>,
}

/// A statically configured user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    pub username: String,
    pub password: String,
    pub group: UserGroup,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            cookie_max_age_secs: default_cookie_max_age(),
            cookie_secure: false,
            users: default_users(),
        }
    }
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.cookie_name.is_empty() {
            return Err("Cookie name cannot be empty".to_string());
        }

        if self
            .cookie_name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, ';' | ',' | '='))
        {
            return Err(format!("Invalid cookie name: {}", self.cookie_name));
        }

        if self.cookie_max_age_secs == 0 {
            return Err("Cookie max age must be positive".to_string());
        }

        if i64::try_from(self.cookie_max_age_secs).is_err() {
            return Err(format!(
                "Cookie max age too large: {}",
                self.cookie_max_age_secs
            ));
        }

        let mut seen = HashSet::new();
        for user in &self.users {
            if user.username.is_empty() {
                return Err("Username cannot be empty".to_string());
            }
            if !seen.insert(user.username.as_str()) {
                return Err(format!("Duplicate username: {}", user.username));
            }
        }

        Ok(())
    }
}

/// The demo accounts
fn default_users() -> Vec<UserConfig> {
    vec![
        UserConfig {
            username: "admin".to_string(),
            password: "foo".to_string(),
            group: UserGroup::Admin,
        },
        UserConfig {
            username: "user".to_string(),
            password: "foo".to_string(),
            group: UserGroup::User,
        },
    ]
}

/// Warn about insecure configuration in development
pub fn warn_insecure_config(config: &AuthConfig) {
    if !config.cookie_secure {
        warn!("Session cookie is not marked Secure; only use this over plain HTTP in development");
    }
    if config.users.iter().any(|u| u.password.len() < 8) {
        warn!("Some configured users have short passwords; demo credentials are not for production");
    }
}
