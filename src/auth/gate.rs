//! Access gate for protected page computations
//!
//! [`with_rbac`] pairs a predicate over the acting user with a page handler.
//! The predicate runs twice: once before the handler, where a denial flags
//! the response 401 but still lets the handler produce fallback content, and
//! once more against the live session store when the response is produced.

use super::service::AuthSystem;
use super::state::SessionState;
use super::types::{PublicUser, RequestContext};
use crate::utils::error::{GateError, Result};
use actix_web::http::StatusCode;
use serde::Serialize;
use std::future::Future;
use tracing::{debug, warn};

/// Input handed to a protected handler
#[derive(Debug, Clone)]
pub struct InitialProps {
    /// Session state hydrated from the request
    pub state: SessionState,
    /// Outcome of the pre-computation check
    pub granted: bool,
}

/// Outcome of serving a protected page
#[derive(Debug, Clone, Serialize)]
pub struct GateResponse<T> {
    #[serde(skip)]
    pub status: StatusCode,
    /// Final decision, taken against the live session
    pub granted: bool,
    pub user: Option<PublicUser>,
    pub props: T,
}

/// A page computation guarded by a predicate
pub struct Protected<P, H> {
    predicate: P,
    handler: H,
}

/// Guard `handler` with `predicate`
pub fn with_rbac<P, H, F, T>(predicate: P, handler: H) -> Protected<P, H>
where
    P: Fn(Option<&PublicUser>) -> bool,
    H: Fn(InitialProps) -> F,
    F: Future<Output = Result<T>>,
{
    Protected { predicate, handler }
}

impl<P, H, F, T> Protected<P, H>
where
    P: Fn(Option<&PublicUser>) -> bool,
    H: Fn(InitialProps) -> F,
    F: Future<Output = Result<T>>,
{
    /// Evaluate the predicate for a user
    pub fn check(&self, user: Option<&PublicUser>) -> bool {
        (self.predicate)(user)
    }

    /// Run the handler and produce the final response
    pub async fn serve(&self, auth: &AuthSystem, ctx: &RequestContext) -> Result<GateResponse<T>> {
        let granted = self.check(ctx.user.as_ref());
        if !granted {
            debug!("Access gate denied request before page computation");
        }

        let props = (self.handler)(InitialProps {
            state: SessionState::hydrate(ctx),
            granted,
        })
        .await?;

        // Session may have been revoked while the handler ran
        let user = match &ctx.token {
            Some(token) => match auth.resolve_session(token).await {
                Ok(user) => Some(user),
                Err(GateError::InvalidSession(_)) => None,
                Err(e) => return Err(e),
            },
            None => None,
        };

        let granted_now = self.check(user.as_ref());
        if granted && !granted_now {
            warn!("Access revoked between page computation and response");
        }

        let status = if granted && granted_now {
            StatusCode::OK
        } else {
            StatusCode::UNAUTHORIZED
        };

        Ok(GateResponse {
            status,
            granted: granted_now,
            user,
            props,
        })
    }
}
