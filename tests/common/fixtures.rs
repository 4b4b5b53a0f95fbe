//! Test fixtures
//!
//! All fixtures build real application state on the in-memory session store.

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::{test, web};
use rbac_gate::Config;
use rbac_gate::server::AppState;
use serde_json::json;

/// Application state with the default users, grants and pages
pub fn test_state() -> web::Data<AppState> {
    test_state_with(Config::default())
}

/// Application state for a custom configuration
pub fn test_state_with(config: Config) -> web::Data<AppState> {
    web::Data::new(AppState::in_memory(config).expect("failed to build app state"))
}

/// `POST /api/login` request
pub fn login_request(username: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "username": username, "password": password }))
}

/// Session cookie set by a response, if any
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "token")
        .map(|c| c.into_owned())
}
