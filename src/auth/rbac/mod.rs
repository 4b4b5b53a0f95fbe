//! Role-Based Access Control (RBAC) policy engine
//!
//! Grants are `(role, resource, action, possession)` tuples read once at
//! startup. A request asks for an action with an ownership qualifier: `own`
//! when the acting user owns the resource, `any` otherwise.

mod policy;
mod types;

pub use policy::{PermissionCheck, RbacPolicy};
pub use types::{Action, Grant, Permission, Possession, default_grants};
