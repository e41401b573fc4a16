//! End-to-end tests for the passwordless login flow
//!
//! Each test wires the real services around the mock email channel, so the
//! flow under test is exactly what the server runs in production minus the
//! external EmailJS call.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, web};
    use serde_json::{json, Value};

    use wf_api::app::create_app;
    use wf_api::routes::AppState;
    use wf_core::services::{
        AuthService, OtpService, OtpServiceConfig, PlannerService, TokenService,
        TokenServiceConfig,
    };
    use wf_infra::ai::MockGenerativeBackend;
    use wf_infra::email::MockEmailDelivery;

    struct TestHarness {
        state: web::Data<AppState<MockEmailDelivery, MockGenerativeBackend>>,
        token_service: Arc<TokenService>,
        email: Arc<MockEmailDelivery>,
    }

    fn harness() -> TestHarness {
        let email = Arc::new(MockEmailDelivery::new());
        let otp_service = Arc::new(OtpService::new(email.clone(), OtpServiceConfig::default()));
        let token_service = Arc::new(TokenService::new(TokenServiceConfig::default()));
        let auth_service = Arc::new(AuthService::new(otp_service, token_service.clone()));
        let planner_service =
            Arc::new(PlannerService::new(Arc::new(MockGenerativeBackend::failing())));

        TestHarness {
            state: web::Data::new(AppState {
                auth_service,
                planner_service,
            }),
            token_service,
            email,
        }
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let h = harness();
        let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "status": "healthy" }));
    }

    #[actix_web::test]
    async fn test_login_flow_end_to_end() {
        let h = harness();
        let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

        // Request a code with an address that needs normalization
        let req = test::TestRequest::post()
            .uri("/auth/request-otp")
            .set_json(json!({ "email": "  Traveler@Example.COM " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "OTP sent successfully to your email");

        // Fish the delivered code out of the mock channel
        let (email, code) = h.email.last_sent().await.unwrap();
        assert_eq!(email, "traveler@example.com");

        let req = test::TestRequest::post()
            .uri("/auth/verify-otp")
            .set_json(json!({ "email": "traveler@example.com", "otp": code }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["email"], "traveler@example.com");

        // The issued token verifies against the same service
        let token = body["token"].as_str().unwrap();
        let claims = h.token_service.verify_session_token(token).unwrap();
        assert_eq!(claims.sub, "traveler@example.com");
    }

    #[actix_web::test]
    async fn test_request_otp_rejects_malformed_email() {
        let h = harness();
        let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

        let req = test::TestRequest::post()
            .uri("/auth/request-otp")
            .set_json(json!({ "email": "not-an-email" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_email");
        assert_eq!(body["message"], "Invalid email format");
        assert_eq!(h.email.sent_count(), 0);
    }

    #[actix_web::test]
    async fn test_verify_otp_rejects_malformed_code() {
        let h = harness();
        let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

        let req = test::TestRequest::post()
            .uri("/auth/verify-otp")
            .set_json(json!({ "email": "traveler@example.com", "otp": "12345" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_otp");
    }

    #[actix_web::test]
    async fn test_verify_otp_rejects_wrong_code() {
        let h = harness();
        let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

        let req = test::TestRequest::post()
            .uri("/auth/request-otp")
            .set_json(json!({ "email": "traveler@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let (_, code) = h.email.last_sent().await.unwrap();
        let wrong = if code == "000000" { "111111" } else { "000000" };

        let req = test::TestRequest::post()
            .uri("/auth/verify-otp")
            .set_json(json!({ "email": "traveler@example.com", "otp": wrong }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_credentials");
        assert_eq!(body["message"], "Invalid or expired OTP");
    }

    #[actix_web::test]
    async fn test_degraded_delivery_still_allows_login() {
        let h = harness();
        let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;
        h.email.set_simulate_failure(true);

        // The request still succeeds, with the degraded-mode message
        let req = test::TestRequest::post()
            .uri("/auth/request-otp")
            .set_json(json!({ "email": "traveler@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "Email delivery failed, but you can use any 6-digit code to login"
        );

        // Any well-formed code verifies while the channel is down
        let req = test::TestRequest::post()
            .uri("/auth/verify-otp")
            .set_json(json!({ "email": "traveler@example.com", "otp": "000000" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["token"].as_str().is_some());
    }

    #[actix_web::test]
    async fn test_malformed_json_returns_standard_error_body() {
        let h = harness();
        let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

        let req = test::TestRequest::post()
            .uri("/auth/request-otp")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"email\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_request");
    }

    #[actix_web::test]
    async fn test_unknown_route_returns_404() {
        let h = harness();
        let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

        let req = test::TestRequest::get().uri("/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "not_found");
    }
}
