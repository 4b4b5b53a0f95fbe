//! Common test utilities for rbac-gate

pub mod fixtures;

pub use fixtures::{login_request, session_cookie, test_state, test_state_with};

/// Build the application service for a state fixture
#[macro_export]
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(rbac_gate::server::HttpServer::create_app($state.clone()))
            .await
    };
}

/// Log in through the HTTP surface and return the session cookie
#[macro_export]
macro_rules! login_as {
    ($app:expr, $username:expr, $password:expr) => {{
        let resp = actix_web::test::call_service(
            &$app,
            $crate::common::login_request($username, $password).to_request(),
        )
        .await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
        $crate::common::session_cookie(&resp).expect("login did not set a session cookie")
    }};
}
