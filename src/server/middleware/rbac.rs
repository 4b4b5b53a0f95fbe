//! RBAC middleware
//!
//! Must run inside [`SessionMiddleware`](super::SessionMiddleware): it reads
//! the acting user from the request context.

use crate::auth::RequestContext;
use crate::auth::rbac::Permission;
use crate::server::AppState;
use crate::utils::error::GateError;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{HttpMessage, web};
use futures::future::{Either, LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, warn};

/// Grant check for a route
#[derive(Debug, Clone)]
pub struct RbacMiddleware {
    permission: Permission,
    resource: Rc<str>,
}

impl RbacMiddleware {
    pub fn new(permission: Permission, resource: &str) -> Self {
        Self {
            permission,
            resource: Rc::from(resource),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RbacMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RbacMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RbacMiddlewareService {
            service,
            permission: self.permission,
            resource: Rc::clone(&self.resource),
        }))
    }
}

pub struct RbacMiddlewareService<S> {
    service: S,
    permission: Permission,
    resource: Rc<str>,
}

impl<S, B> Service<ServiceRequest> for RbacMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Either<
        LocalBoxFuture<'static, Result<Self::Response, Self::Error>>,
        Ready<Result<Self::Response, Self::Error>>,
    >;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Err(err) = self.authorize(&req) {
            return Either::Right(ready(Ok(req.error_response(err).map_into_right_body())));
        }

        let fut = self.service.call(req);
        Either::Left(Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        }))
    }
}

impl<S> RbacMiddlewareService<S> {
    fn authorize(&self, req: &ServiceRequest) -> Result<(), GateError> {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            return Err(GateError::internal("Application state not configured"));
        };

        let extensions = req.extensions();
        let user = extensions
            .get::<RequestContext>()
            .and_then(|ctx| ctx.user.as_ref());

        let Some(user) = user else {
            return Err(GateError::unauthorized("Valid session required"));
        };

        let check = state
            .rbac
            .check_grant_detailed(Some(user), self.permission, &self.resource);
        if check.granted {
            debug!(user = %user.username, permission = %self.permission, "Access granted");
            Ok(())
        } else {
            warn!(
                user = %user.username,
                "Access denied: {}",
                check.denial_reason.unwrap_or_default()
            );
            Err(GateError::permission_denied(format!(
                "{} on {}",
                self.permission, self.resource
            )))
        }
    }
}
