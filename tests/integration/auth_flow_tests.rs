//! Login, session lookup and logout over HTTP

#[cfg(test)]
mod tests {
    use crate::common::{login_request, session_cookie, test_state};
    use crate::{init_app, login_as};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{Value, json};

    /// login admin/foo, read /api/me, log out, and /api/me is rejected again
    #[actix_web::test]
    async fn test_full_session_lifecycle() {
        let state = test_state();
        let app = init_app!(state);

        let cookie = login_as!(app, "admin", "foo");

        let req = test::TestRequest::get()
            .uri("/api/me")
            .cookie(cookie.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"username": "admin", "group": "admin"}));
        assert!(body.get("password").is_none());

        let req = test::TestRequest::post()
            .uri("/api/logout")
            .cookie(cookie.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri("/api/me")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Not Authorized");
    }

    #[actix_web::test]
    async fn test_wrong_password_issues_no_session() {
        let state = test_state();
        let app = init_app!(state);

        let resp = test::call_service(&app, login_request("user", "bar").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(session_cookie(&resp).is_none());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Wrong username and/or password");
    }

    #[actix_web::test]
    async fn test_each_login_gets_a_fresh_token() {
        let state = test_state();
        let app = init_app!(state);

        let first = login_as!(app, "user", "foo");
        let second = login_as!(app, "user", "foo");
        assert_ne!(first.value(), second.value());

        // logging out one session leaves the other alive
        let req = test::TestRequest::post()
            .uri("/api/logout")
            .cookie(first.clone())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get()
            .uri("/api/me")
            .cookie(first)
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::UNAUTHORIZED
        );

        let req = test::TestRequest::get()
            .uri("/api/me")
            .cookie(second)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_malformed_login_body() {
        let state = test_state();
        let app = init_app!(state);

        let bodies = [
            json!({"username": "admin"}).to_string(),
            json!({}).to_string(),
            "not json".to_string(),
        ];
        for body in bodies {
            let req = test::TestRequest::post()
                .uri("/api/login")
                .insert_header(("Content-Type", "application/json"))
                .set_payload(body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            assert!(session_cookie(&resp).is_none());

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({"message": "Wrong username and/or password"}));
        }
    }

    #[actix_web::test]
    async fn test_logout_is_idempotent() {
        let state = test_state();
        let app = init_app!(state);
        let cookie = login_as!(app, "admin", "foo");

        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/api/logout")
                .cookie(cookie.clone())
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({}));
        }
    }
}
