//! RBAC type definitions

use crate::auth::UserGroup;
use crate::core::pages::PAGE_RESOURCE;
use crate::utils::error::GateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wildcard resource pattern matching every resource type
pub const ANY_RESOURCE: &str = "*";

/// CRUD action on a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Create, Action::Read, Action::Update, Action::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl FromStr for Action {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "create" => Ok(Action::Create),
            "read" => Ok(Action::Read),
            "update" => Ok(Action::Update),
            "delete" => Ok(Action::Delete),
            other => Err(GateError::validation(format!("Unknown action: {}", other))),
        }
    }
}

/// Ownership qualifier of a grant or a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Possession {
    /// The resource belongs to the acting user
    Own,
    /// Regardless of owner
    Any,
}

impl Possession {
    pub fn as_str(&self) -> &'static str {
        match self {
            Possession::Own => "own",
            Possession::Any => "any",
        }
    }

    /// Qualifier for a user acting on a resource owned by `owner`
    pub fn for_owner(username: &str, owner: &str) -> Self {
        if username == owner {
            Possession::Own
        } else {
            Possession::Any
        }
    }

    /// Whether a grant with this qualifier covers a request with `requested`
    ///
    /// `any` covers both; `own` only covers `own`.
    pub fn covers(&self, requested: Possession) -> bool {
        matches!(self, Possession::Any) || requested == Possession::Own
    }
}

impl FromStr for Possession {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "own" => Ok(Possession::Own),
            "any" => Ok(Possession::Any),
            other => Err(GateError::validation(format!(
                "Unknown possession: {}",
                other
            ))),
        }
    }
}

/// An action combined with an ownership qualifier, e.g. `update:own`
///
/// Parses both the `action:possession` form and the camel-case form
/// (`readAny`, `updateOwn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Permission {
    pub action: Action,
    pub possession: Possession,
}

impl Permission {
    pub const fn new(action: Action, possession: Possession) -> Self {
        Self { action, possession }
    }

    pub const fn any(action: Action) -> Self {
        Self::new(action, Possession::Any)
    }

    pub const fn own(action: Action) -> Self {
        Self::new(action, Possession::Own)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.action.as_str(), self.possession.as_str())
    }
}

impl FromStr for Permission {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some((action, possession)) = trimmed.split_once(':') {
            return Ok(Self::new(action.parse()?, possession.parse()?));
        }

        let lower = trimmed.to_ascii_lowercase();
        for possession in [Possession::Own, Possession::Any] {
            if let Some(action) = lower.strip_suffix(possession.as_str()) {
                if !action.is_empty() {
                    return Ok(Self::new(action.parse()?, possession));
                }
            }
        }

        Err(GateError::validation(format!("Invalid permission: {}", s)))
    }
}

impl TryFrom<String> for Permission {
    type Error = GateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.to_string()
    }
}

/// A single policy rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    pub role: UserGroup,
    /// Resource type, or `*` for every resource type
    pub resource: String,
    pub permission: Permission,
}

impl Grant {
    pub fn new(role: UserGroup, resource: impl Into<String>, permission: Permission) -> Self {
        Self {
            role,
            resource: resource.into(),
            permission,
        }
    }

    pub fn matches_resource(&self, resource: &str) -> bool {
        self.resource == ANY_RESOURCE || self.resource == resource
    }

    /// Whether this grant authorizes `permission` on `resource` for its role
    pub fn allows(&self, permission: Permission, resource: &str) -> bool {
        self.permission.action == permission.action
            && self.permission.possession.covers(permission.possession)
            && self.matches_resource(resource)
    }
}

impl fmt::Display for Grant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.role, self.permission, self.resource)
    }
}

/// The demo policy: admins may do anything to any page, users may read any
/// page and create, update or delete their own.
pub fn default_grants() -> Vec<Grant> {
    let admin = Action::ALL
        .into_iter()
        .map(|action| Grant::new(UserGroup::Admin, PAGE_RESOURCE, Permission::any(action)));

    let user = [
        Permission::own(Action::Create),
        Permission::any(Action::Read),
        Permission::own(Action::Update),
        Permission::own(Action::Delete),
    ]
    .into_iter()
    .map(|permission| Grant::new(UserGroup::User, PAGE_RESOURCE, permission));

    admin.chain(user).collect()
}
