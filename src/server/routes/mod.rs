//! HTTP route modules
//!
//! All API routes live under `/api`. Every request in the scope passes
//! through the optional session middleware; individual resources add the
//! stricter checks they need.

pub mod auth;
pub mod pages;
pub mod rbac;

use crate::auth::rbac::{Action, Permission};
use crate::core::pages::PAGE_RESOURCE;
use crate::server::middleware::{RbacMiddleware, SessionMiddleware};
use crate::utils::error::GateError;
use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use tracing::debug;

/// Body extraction failures answer with a `{message}` body like every other error
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!("Rejecting request body: {}", err);
    GateError::bad_request(err.to_string()).into()
}

/// A login body that cannot be read fails like any other login attempt
fn login_json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!("Rejecting login body: {}", err);
    GateError::invalid_credentials("malformed login request").into()
}

/// Configure API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(SessionMiddleware::optional())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(
                web::resource("/login")
                    .app_data(web::JsonConfig::default().error_handler(login_json_error_handler))
                    .route(web::post().to(auth::login)),
            )
            .route("/logout", web::post().to(auth::logout))
            .service(
                web::resource("/me")
                    .wrap(SessionMiddleware::required())
                    .route(web::get().to(auth::get_current_user)),
            )
            .service(
                web::resource("/rbac")
                    .wrap(RbacMiddleware::new(
                        Permission::any(Action::Read),
                        PAGE_RESOURCE,
                    ))
                    .wrap(SessionMiddleware::required())
                    .route(web::post().to(rbac::rbac_probe)),
            )
            .route("/pages", web::get().to(pages::list_pages))
            .service(
                web::resource("/pages/{index}")
                    .wrap(SessionMiddleware::required())
                    .route(web::put().to(pages::update_page)),
            ),
    );
}
