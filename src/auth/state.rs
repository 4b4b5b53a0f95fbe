//! Client session state
//!
//! The state a page carries about the visitor: who is logged in, with which
//! token, and the last login error. It is hydrated on the server from the
//! request context and evolves through [`SessionEvent`]s.

use super::types::{AuthInfo, PublicUser, RequestContext};
use serde::Serialize;

/// Where a visitor is in the login flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Unauthenticated,
    Authenticated,
}

/// Transitions of the session state
#[derive(Debug, Clone)]
pub enum SessionEvent {
    LoginSuccess(AuthInfo),
    LoginError(String),
    Logout,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub user: Option<PublicUser>,
    /// Kept server side; the cookie already carries it to the browser
    #[serde(skip_serializing)]
    pub token: Option<String>,
    pub error: Option<String>,
}

impl SessionState {
    /// Initial state for a request
    pub fn hydrate(ctx: &RequestContext) -> Self {
        match (&ctx.user, &ctx.token) {
            (Some(user), Some(token)) => Self {
                user: Some(user.clone()),
                token: Some(token.clone()),
                error: None,
            },
            _ => Self::default(),
        }
    }

    /// Apply an event; every event starts from a clean state
    pub fn apply(&mut self, event: SessionEvent) {
        *self = match event {
            SessionEvent::LoginSuccess(info) => Self {
                user: Some(info.user),
                token: Some(info.token),
                error: None,
            },
            SessionEvent::LoginError(message) => Self {
                error: Some(message),
                ..Self::default()
            },
            SessionEvent::Logout => Self::default(),
        };
    }

    pub fn phase(&self) -> SessionPhase {
        if self.user.is_some() && self.token.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }
}
