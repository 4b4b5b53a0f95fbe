//! Session management endpoints

use crate::auth::RequestContext;
use crate::server::AppState;
use actix_web::cookie::Cookie;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde_json::json;
use tracing::info;

/// User logout endpoint
///
/// Always succeeds; the session cookie is cleared either way.
pub async fn logout(state: web::Data<AppState>, ctx: RequestContext) -> ActixResult<HttpResponse> {
    if let Some(token) = &ctx.token {
        state.auth.logout(token).await;
    }
    info!(
        user = ctx.user.as_ref().map(|u| u.username.as_str()).unwrap_or("anonymous"),
        "User logout"
    );

    let mut cookie = Cookie::build(state.config.auth().cookie_name.clone(), "")
        .path("/")
        .http_only(true)
        .finish();
    cookie.make_removal();

    Ok(HttpResponse::Ok().cookie(cookie).json(json!({})))
}
