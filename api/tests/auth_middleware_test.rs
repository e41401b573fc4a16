//! Integration tests for the bearer-token extractors

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, web, App, HttpResponse};
    use serde_json::Value;

    use wf_api::handlers::ApiError;
    use wf_api::middleware::auth::AuthContext;
    use wf_core::services::{TokenService, TokenServiceConfig};

    async fn whoami(auth: AuthContext) -> Result<HttpResponse, ApiError> {
        Ok(HttpResponse::Ok().json(serde_json::json!({ "email": auth.email })))
    }

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new(TokenServiceConfig::default()))
    }

    #[actix_web::test]
    async fn test_missing_header_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(token_service()))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "unauthorized");
        assert_eq!(body["message"], "Authorization header missing");
    }

    #[actix_web::test]
    async fn test_non_bearer_scheme_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(token_service()))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Token abc123"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid authorization header format");
    }

    #[actix_web::test]
    async fn test_garbage_token_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(token_service()))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid authentication credentials");
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_the_handler() {
        let service = token_service();
        let token = service.generate_session_token("traveler@example.com").unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(service))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["email"], "traveler@example.com");
    }

    #[actix_web::test]
    async fn test_token_signed_with_other_secret_is_rejected() {
        let other = Arc::new(TokenService::new(TokenServiceConfig {
            jwt_secret: "a-completely-different-secret".to_string(),
            ..TokenServiceConfig::default()
        }));
        let token = other.generate_session_token("traveler@example.com").unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(token_service()))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
