//! Session middleware
//!
//! Resolves the session cookie into a [`RequestContext`] stored in the
//! request extensions. Handlers receive it through the `RequestContext`
//! extractor.

use crate::auth::RequestContext;
use crate::server::AppState;
use crate::server::middleware::helpers::extract_session_token;
use crate::utils::error::GateError;
use crate::utils::redact_token;
use actix_web::body::EitherBody;
use actix_web::dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use tracing::{debug, error};

/// Session middleware for Actix-web
#[derive(Debug, Clone, Copy)]
pub struct SessionMiddleware {
    required: bool,
}

impl SessionMiddleware {
    /// Resolve the session if there is one; anonymous requests pass
    pub fn optional() -> Self {
        Self { required: false }
    }

    /// Reject requests without a valid session with 401
    pub fn required() -> Self {
        Self { required: true }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = SessionMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
            required: self.required,
        }))
    }
}

/// Service implementation for session middleware
pub struct SessionMiddlewareService<S> {
    service: Rc<S>,
    required: bool,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let required = self.required;

        Box::pin(async move {
            let resolved = req.extensions().get::<RequestContext>().cloned();
            let ctx = match resolved {
                Some(ctx) => ctx,
                None => {
                    let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                        error!("Application state missing from session middleware");
                        let err = GateError::internal("Application state not configured");
                        return Ok(req.error_response(err).map_into_right_body());
                    };

                    match resolve_context(&state, &req).await {
                        Ok(ctx) => ctx,
                        Err(e) => return Ok(req.error_response(e).map_into_right_body()),
                    }
                }
            };

            let authenticated = ctx.is_authenticated();
            req.extensions_mut().insert(ctx);

            if required && !authenticated {
                debug!(path = %req.path(), "Rejecting request without a session");
                let err = GateError::unauthorized("Valid session required");
                return Ok(req.error_response(err).map_into_right_body());
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

async fn resolve_context(
    state: &AppState,
    req: &ServiceRequest,
) -> crate::utils::error::Result<RequestContext> {
    let cookie_name = &state.config.auth().cookie_name;
    let Some(token) = extract_session_token(req.headers(), cookie_name) else {
        return Ok(RequestContext::anonymous());
    };

    match state.auth.resolve_session(&token).await {
        Ok(user) => {
            debug!(user = %user.username, "Request authenticated");
            Ok(RequestContext::authenticated(user, token))
        }
        Err(GateError::InvalidSession(_)) => {
            debug!(token = %redact_token(&token), "Ignoring unknown session token");
            Ok(RequestContext::anonymous())
        }
        Err(e) => Err(e),
    }
}

impl FromRequest for RequestContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(get_request_context(req))
    }
}

/// Extract request context from request
pub fn get_request_context(req: &HttpRequest) -> Result<RequestContext, actix_web::Error> {
    req.extensions()
        .get::<RequestContext>()
        .cloned()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Missing request context"))
}
