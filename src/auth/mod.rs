//! Authentication and authorization system
//!
//! Users, sessions, the RBAC policy engine and the access gate for
//! protected page computations.

mod gate;
mod password;
pub mod rbac;
mod service;
pub mod session;
mod state;
mod types;
pub(crate) mod users;


pub use gate::{GateResponse, InitialProps, Protected, with_rbac};
pub use service::AuthSystem;
pub use state::{SessionEvent, SessionPhase, SessionState};
pub use types::{AuthInfo, PublicUser, RequestContext, User, UserGroup};
pub use users::UserIndex;
