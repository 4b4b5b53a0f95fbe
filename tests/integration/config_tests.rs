//! Configuration-driven behavior

#[cfg(test)]
mod tests {
    use crate::common::{login_request, session_cookie, test_state_with};
    use crate::init_app;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use rbac_gate::Config;
    use rbac_gate::auth::rbac::{Action, Grant, Permission};
    use rbac_gate::config::UserConfig;
    use rbac_gate::core::Page;
    use rbac_gate::UserGroup;

    fn custom_config() -> Config {
        let mut config = Config::default();
        config.auth.cookie_name = "sid".to_string();
        config.auth.users = vec![UserConfig {
            username: "carol".to_string(),
            password: "s3cret".to_string(),
            group: UserGroup::User,
        }];
        config.rbac.grants = vec![Grant::new(
            UserGroup::User,
            "page",
            Permission::own(Action::Read),
        )];
        config.rbac.pages = vec![Page::new("Carol's page", "carol")];
        config
    }

    #[actix_web::test]
    async fn test_custom_cookie_name() {
        let state = test_state_with(custom_config());
        let app = init_app!(state);

        let resp = test::call_service(&app, login_request("carol", "s3cret").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(session_cookie(&resp).is_none());

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == "sid")
            .map(|c| c.into_owned())
            .unwrap();

        let req = test::TestRequest::get()
            .uri("/api/me")
            .cookie(cookie)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_default_users_absent_from_custom_config() {
        let state = test_state_with(custom_config());
        let app = init_app!(state);

        let resp = test::call_service(&app, login_request("admin", "foo").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_own_grant_does_not_open_index() {
        let state = test_state_with(custom_config());
        let app = init_app!(state);

        let resp = test::call_service(&app, login_request("carol", "s3cret").to_request()).await;
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == "sid")
            .map(|c| c.into_owned())
            .unwrap();

        let req = test::TestRequest::post()
            .uri("/api/rbac")
            .cookie(cookie)
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::FORBIDDEN
        );
    }

    #[actix_web::test]
    async fn test_oversized_cookie_lifetime_stays_positive() {
        let mut config = Config::default();
        config.auth.cookie_max_age_secs = u64::MAX;
        let state = test_state_with(config);
        let app = init_app!(state);

        let resp = test::call_service(&app, login_request("admin", "foo").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let max_age = session_cookie(&resp)
            .and_then(|c| c.max_age())
            .map(|d| d.whole_seconds())
            .unwrap();
        assert_eq!(max_age, i64::MAX);
    }
}
