//! Application factory
//!
//! Builds the Actix-web application with middleware, shared state and the
//! full route table. Kept separate from `main` so integration tests can
//! assemble the same app around mock collaborators.

use actix_web::{web, App, HttpResponse};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use crate::handlers::error::json_error_handler;
use crate::middleware::cors::create_cors;
use crate::routes::auth::{request_otp, verify_otp};
use crate::routes::itinerary::generate_itinerary;
use crate::routes::AppState;

use wf_core::services::{DeliveryChannel, GenerativeBackend, TokenService};
use wf_shared::types::{ErrorResponse, HealthStatus};

/// Create and configure the application with all dependencies
pub fn create_app<D, G>(
    app_state: web::Data<AppState<D, G>>,
    token_service: Arc<TokenService>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    D: DeliveryChannel + 'static,
    G: GenerativeBackend + 'static,
{
    let cors = create_cors();

    App::new()
        // Shared state: handlers take AppState, the auth extractor resolves
        // the token service on its own
        .app_data(app_state)
        .app_data(web::Data::from(token_service))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(TracingLogger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Passwordless login routes
        .service(
            web::scope("/auth")
                .route("/request-otp", web::post().to(request_otp::<D, G>))
                .route("/verify-otp", web::post().to(verify_otp::<D, G>)),
        )
        // Trip planning routes
        .service(
            web::scope("/api")
                .route("/generate-itinerary", web::post().to(generate_itinerary::<D, G>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": HealthStatus::Healthy,
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "not_found",
        "The requested resource was not found",
    ))
}
