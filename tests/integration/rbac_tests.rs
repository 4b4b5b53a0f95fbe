//! RBAC-protected API routes

#[cfg(test)]
mod tests {
    use crate::common::test_state;
    use crate::{init_app, login_as};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn test_rbac_probe_granted_for_both_roles() {
        let state = test_state();
        let app = init_app!(state);

        for username in ["admin", "user"] {
            let cookie = login_as!(app, username, "foo");
            let req = test::TestRequest::post()
                .uri("/api/rbac")
                .cookie(cookie)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({"foo": "bar"}));
        }
    }

    #[actix_web::test]
    async fn test_rbac_probe_requires_session() {
        let state = test_state();
        let app = init_app!(state);

        let req = test::TestRequest::post().uri("/api/rbac").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_user_cannot_retitle_admin_page() {
        let state = test_state();
        let app = init_app!(state);
        let cookie = login_as!(app, "user", "foo");

        let req = test::TestRequest::put()
            .uri("/api/pages/0")
            .cookie(cookie)
            .set_json(json!({"title": "Mine now"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Not enough permissions");
        assert_eq!(state.pages.get(0).unwrap().title, "Admin's page");
    }

    #[actix_web::test]
    async fn test_user_retitles_own_page() {
        let state = test_state();
        let app = init_app!(state);
        let cookie = login_as!(app, "user", "foo");

        let req = test::TestRequest::put()
            .uri("/api/pages/1")
            .cookie(cookie)
            .set_json(json!({"title": "Renamed"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], "Renamed");
        assert_eq!(body["can_write"], true);
    }

    #[actix_web::test]
    async fn test_admin_retitles_any_page() {
        let state = test_state();
        let app = init_app!(state);
        let cookie = login_as!(app, "admin", "foo");

        let req = test::TestRequest::put()
            .uri("/api/pages/1")
            .cookie(cookie)
            .set_json(json!({"title": "Moderated"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(state.pages.get(1).unwrap().title, "Moderated");
    }

    #[actix_web::test]
    async fn test_retitle_errors() {
        let state = test_state();
        let app = init_app!(state);
        let cookie = login_as!(app, "admin", "foo");

        let req = test::TestRequest::put()
            .uri("/api/pages/7")
            .cookie(cookie.clone())
            .set_json(json!({"title": "Ghost"}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );

        let req = test::TestRequest::put()
            .uri("/api/pages/0")
            .cookie(cookie)
            .set_json(json!({"title": "  "}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::BAD_REQUEST
        );

        let req = test::TestRequest::put()
            .uri("/api/pages/0")
            .set_json(json!({"title": "Anonymous"}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[actix_web::test]
    async fn test_malformed_title_body() {
        let state = test_state();
        let app = init_app!(state);
        let cookie = login_as!(app, "admin", "foo");

        let req = test::TestRequest::put()
            .uri("/api/pages/0")
            .cookie(cookie)
            .insert_header(("Content-Type", "application/json"))
            .set_payload(r#"{"name": "wrong field"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        let message = body["message"].as_str().unwrap();
        assert!(message.starts_with("Bad request:"));
        assert!(message.contains("title"));
    }
}
