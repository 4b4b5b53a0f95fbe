//! Policy evaluation

use super::types::{Action, Grant, Permission, Possession};
use crate::auth::{PublicUser, UserGroup};
use crate::config::RbacConfig;
use std::collections::HashMap;
use tracing::{debug, info};

/// Static grant table indexed by role
///
/// There is no deny list: a request is allowed when some grant of the user's
/// role covers it, and denied otherwise.
#[derive(Debug, Clone, Default)]
pub struct RbacPolicy {
    grants: HashMap<UserGroup, Vec<Grant>>,
}

/// Detailed outcome of a grant check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCheck {
    pub granted: bool,
    /// Grant that authorized the request
    pub granted_by: Option<Grant>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}

impl RbacPolicy {
    pub fn new(grants: impl IntoIterator<Item = Grant>) -> Self {
        let mut table: HashMap<UserGroup, Vec<Grant>> = HashMap::new();
        for grant in grants {
            table.entry(grant.role).or_default().push(grant);
        }

        info!(
            "RBAC policy loaded with {} grants across {} roles",
            table.values().map(Vec::len).sum::<usize>(),
            table.len()
        );
        Self { grants: table }
    }

    pub fn from_config(config: &RbacConfig) -> Self {
        Self::new(config.grants.iter().cloned())
    }

    /// Grants configured for a role
    pub fn grants_for(&self, role: UserGroup) -> &[Grant] {
        self.grants.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `role` may perform `permission` on `resource`
    pub fn role_allows(&self, role: UserGroup, permission: Permission, resource: &str) -> bool {
        self.grants_for(role)
            .iter()
            .any(|grant| grant.allows(permission, resource))
    }

    /// Check a permission for a possibly anonymous user
    ///
    /// Anonymous users are always denied.
    pub fn check_grant(
        &self,
        user: Option<&PublicUser>,
        permission: Permission,
        resource: &str,
    ) -> bool {
        match user {
            Some(user) => self.role_allows(user.group, permission, resource),
            None => false,
        }
    }

    /// Check an action on a resource owned by `owner`
    ///
    /// The ownership qualifier is derived by comparing the acting user with
    /// the owner.
    pub fn check_owned(
        &self,
        user: Option<&PublicUser>,
        action: Action,
        resource: &str,
        owner: &str,
    ) -> bool {
        let Some(user) = user else {
            return false;
        };
        let possession = Possession::for_owner(&user.username, owner);
        self.check_grant(Some(user), Permission::new(action, possession), resource)
    }

    /// Detailed permission check
    pub fn check_grant_detailed(
        &self,
        user: Option<&PublicUser>,
        permission: Permission,
        resource: &str,
    ) -> PermissionCheck {
        let Some(user) = user else {
            return PermissionCheck {
                granted: false,
                granted_by: None,
                denial_reason: Some("No authenticated user".to_string()),
            };
        };

        match self
            .grants_for(user.group)
            .iter()
            .find(|grant| grant.allows(permission, resource))
        {
            Some(grant) => {
                debug!(user = %user.username, grant = %grant, "Grant matched");
                PermissionCheck {
                    granted: true,
                    granted_by: Some(grant.clone()),
                    denial_reason: None,
                }
            }
            None => PermissionCheck {
                granted: false,
                granted_by: None,
                denial_reason: Some(format!(
                    "Role {} lacks {} on {}",
                    user.group, permission, resource
                )),
            },
        }
    }
}
