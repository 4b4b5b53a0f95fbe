//! Static user directory
//!
//! Built once from configuration at process start and immutable afterwards.
//! Users are addressed by their position in the directory, which is what the
//! session store maps tokens to.

use super::password::hash_password;
use super::types::User;
use crate::config::UserConfig;
use crate::utils::error::Result;
use tracing::debug;

/// Index of a user inside the [`UserDirectory`]
pub type UserIndex = usize;

#[derive(Debug, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Build the directory, hashing every configured password
    pub fn from_config(users: &[UserConfig]) -> Result<Self> {
        let users = users
            .iter()
            .map(|u| {
                Ok(User {
                    username: u.username.clone(),
                    password_hash: hash_password(&u.password)?,
                    group: u.group,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("User directory built with {} users", users.len());
        Ok(Self { users })
    }

    /// Find a user by username
    pub fn find_by_username(&self, username: &str) -> Option<(UserIndex, &User)> {
        self.users
            .iter()
            .enumerate()
            .find(|(_, u)| u.username == username)
    }

    pub fn get(&self, index: UserIndex) -> Option<&User> {
        self.users.get(index)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
