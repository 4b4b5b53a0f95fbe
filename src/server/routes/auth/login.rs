//! User login endpoint

use super::models::LoginRequest;
use crate::server::state::AppState;
use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::{info, warn};

/// User login endpoint
///
/// Sets the session cookie and returns the token with the sanitized user.
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    let LoginRequest { username, password } = request.into_inner();

    let info = match state.auth.login(&username, &password).await {
        Ok(info) => info,
        Err(e) => {
            if !e.is_login_failure() {
                warn!("Login failed for {}: {}", username, e);
            }
            return Err(e.into());
        }
    };

    let auth_config = state.config.auth();
    let max_age = i64::try_from(auth_config.cookie_max_age_secs).unwrap_or(i64::MAX);
    let cookie = Cookie::build(auth_config.cookie_name.clone(), info.token.clone())
        .path("/")
        .http_only(true)
        .secure(auth_config.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(max_age))
        .finish();

    info!(user = %info.user.username, "Session cookie issued");
    Ok(HttpResponse::Ok().cookie(cookie).json(info))
}
