//! Tests for server module

use crate::config::Config;
use crate::server::builder::{ServerBuilder, load_config};
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, init_service, read_body_json};
use actix_web::web;
use serde_json::{Value, json};

fn create_state() -> web::Data<AppState> {
    web::Data::new(AppState::in_memory(Config::default()).unwrap())
}

#[test]
fn test_server_builder_requires_config() {
    assert!(ServerBuilder::new().build().is_err());

    let server = ServerBuilder::new()
        .with_config(Config::default())
        .build()
        .unwrap();
    assert_eq!(server.config().port, 3000);
    assert_eq!(server.state().pages.len(), 2);
}

#[tokio::test]
async fn test_load_config_falls_back_to_defaults() {
    let config = load_config(std::path::Path::new("/no/such/gate.yaml"))
        .await
        .unwrap();
    assert_eq!(config.auth().users.len(), 2);
}

#[actix_web::test]
async fn test_health_check() {
    let app = init_service(HttpServer::create_app(create_state())).await;

    let req = TestRequest::get().uri("/health").to_request();
    let resp = call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], crate::VERSION);
    assert!(body["git_hash"].is_string());
}

#[actix_web::test]
async fn test_login_sets_session_cookie() {
    let app = init_service(HttpServer::create_app(create_state())).await;

    let req = TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"username": "admin", "password": "foo"}))
        .to_request();
    let resp = call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "token")
        .map(|c| c.into_owned())
        .unwrap();
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(
        cookie.max_age().map(|d| d.whole_seconds()),
        Some(24 * 60 * 60)
    );

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["token"], cookie.value());
    assert_eq!(body["user"], json!({"username": "admin", "group": "admin"}));
}

#[actix_web::test]
async fn test_login_failures_share_one_message() {
    let app = init_service(HttpServer::create_app(create_state())).await;

    for (username, password) in [("admin", "bar"), ("nobody", "foo")] {
        let req = TestRequest::post()
            .uri("/api/login")
            .set_json(json!({"username": username, "password": password}))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(resp.response().cookies().next().is_none());

        let body: Value = read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Wrong username and/or password"}));
    }
}

#[actix_web::test]
async fn test_logout_without_session() {
    let app = init_service(HttpServer::create_app(create_state())).await;

    let req = TestRequest::post()
        .uri("/api/logout")
        .cookie(Cookie::new("token", "never-issued"))
        .to_request();
    let resp = call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cleared = resp
        .response()
        .cookies()
        .find(|c| c.name() == "token")
        .map(|c| c.value().to_string());
    assert_eq!(cleared.as_deref(), Some(""));

    let body: Value = read_body_json(resp).await;
    assert_eq!(body, json!({}));
}

#[actix_web::test]
async fn test_me_requires_session() {
    let app = init_service(HttpServer::create_app(create_state())).await;

    let req = TestRequest::get().uri("/api/me").to_request();
    let resp = call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body, json!({"message": "Not Authorized"}));
}

#[actix_web::test]
async fn test_session_header_is_accepted() {
    let state = create_state();
    let info = state.auth.login("user", "foo").await.unwrap();
    let app = init_service(HttpServer::create_app(state)).await;

    let req = TestRequest::get()
        .uri("/api/me")
        .insert_header(("Authorization", format!("Session {}", info.token)))
        .to_request();
    let resp = call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["username"], "user");
}
