//! Wayfarer API server entry point
//!
//! Loads configuration from the environment, wires the domain services to
//! their infrastructure collaborators and runs the HTTP server.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wf_api::app::create_app;
use wf_api::routes::AppState;
use wf_core::services::{
    AuthService, OtpService, OtpServiceConfig, PlannerService, TokenService, TokenServiceConfig,
};
use wf_infra::ai::GeminiClient;
use wf_infra::email::create_email_delivery;
use wf_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Wayfarer API server");

    let config = AppConfig::from_env();
    if config.jwt.is_using_default_secret() {
        if config.environment.is_production() {
            anyhow::bail!("JWT_SECRET_KEY must be configured in production");
        }
        warn!("JWT_SECRET_KEY not set, using the built-in development secret");
    }

    // A bad model key should stop the server at startup, not surface as
    // failed planning requests later.
    let gemini = GeminiClient::from_env().context("Gemini configuration is invalid")?;
    gemini
        .verify_credentials()
        .await
        .context("Gemini credential check failed")?;

    // Email delivery degrades instead: without credentials the login flow
    // accepts any well-formed code, which keeps local setups usable.
    let email_delivery = Arc::new(create_email_delivery());

    let otp_service = Arc::new(OtpService::new(email_delivery, OtpServiceConfig::default()));
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.jwt)));
    let auth_service = Arc::new(AuthService::new(otp_service, token_service.clone()));
    let planner_service = Arc::new(PlannerService::new(Arc::new(gemini)));

    let app_state = web::Data::new(AppState {
        auth_service,
        planner_service,
    });

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    info!("Server listening on {}", bind_address);

    let mut server =
        HttpServer::new(move || create_app(app_state.clone(), token_service.clone()));
    if workers > 0 {
        server = server.workers(workers);
    }
    server.bind(&bind_address)?.run().await?;

    Ok(())
}
