//! Gated page index

#[cfg(test)]
mod tests {
    use crate::common::test_state;
    use crate::{init_app, login_as};
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::Value;

    #[actix_web::test]
    async fn test_anonymous_index_falls_back() {
        let state = test_state();
        let app = init_app!(state);

        let req = test::TestRequest::get().uri("/api/pages").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["granted"], false);
        assert_eq!(body["pages"].as_array().map(Vec::len), Some(0));
        assert!(body["state"]["user"].is_null());
    }

    #[actix_web::test]
    async fn test_stale_cookie_falls_back() {
        let state = test_state();
        let app = init_app!(state);

        let req = test::TestRequest::get()
            .uri("/api/pages")
            .cookie(Cookie::new("token", "revoked-long-ago"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_user_index_shows_write_access_per_owner() {
        let state = test_state();
        let app = init_app!(state);
        let cookie = login_as!(app, "user", "foo");

        let req = test::TestRequest::get()
            .uri("/api/pages")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["granted"], true);
        assert_eq!(body["state"]["user"]["username"], "user");
        assert!(body["state"].get("token").is_none());

        let pages = body["pages"].as_array().unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0]["owner"], "admin");
        assert_eq!(pages[0]["can_write"], false);
        assert_eq!(pages[1]["owner"], "user");
        assert_eq!(pages[1]["can_write"], true);
    }

    #[actix_web::test]
    async fn test_admin_index_can_write_everything() {
        let state = test_state();
        let app = init_app!(state);
        let cookie = login_as!(app, "admin", "foo");

        let req = test::TestRequest::get()
            .uri("/api/pages")
            .cookie(cookie)
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

        let pages = body["pages"].as_array().unwrap();
        assert!(pages.iter().all(|p| p["can_write"] == true));
    }
}
