//! EmailJS Delivery Implementation
//!
//! This module sends one-time login codes through the EmailJS REST API.
//! It implements the core `DeliveryChannel` trait for production delivery.
//!
//! ## Features
//!
//! - Template-based delivery via the EmailJS send endpoint
//! - Placeholder detection for unconfigured deployments
//! - Disabled construction so a misconfigured server can still boot
//! - Security: recipient addresses and credentials masked in logs

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use wf_core::DeliveryChannel;
use wf_shared::utils::email::mask_email;

use crate::InfrastructureError;

const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Application name injected into the email template
const APP_NAME: &str = "Wayfarer";

/// EmailJS service configuration
#[derive(Debug, Clone)]
pub struct EmailJsConfig {
    /// EmailJS service ID
    pub service_id: String,
    /// EmailJS template ID
    pub template_id: String,
    /// EmailJS public key (sent as `user_id`)
    pub public_key: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl EmailJsConfig {
    /// Create configuration from environment variables
    ///
    /// Rejects values that still carry the `your_..._here` placeholders from
    /// a template `.env` file, since sending through them can only fail.
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let service_id = std::env::var("EMAILJS_SERVICE_ID")
            .map_err(|_| InfrastructureError::Config("EMAILJS_SERVICE_ID not set".to_string()))?;
        let template_id = std::env::var("EMAILJS_TEMPLATE_ID")
            .map_err(|_| InfrastructureError::Config("EMAILJS_TEMPLATE_ID not set".to_string()))?;
        let public_key = std::env::var("EMAILJS_PUBLIC_KEY")
            .map_err(|_| InfrastructureError::Config("EMAILJS_PUBLIC_KEY not set".to_string()))?;

        for (name, value) in [
            ("EMAILJS_SERVICE_ID", &service_id),
            ("EMAILJS_TEMPLATE_ID", &template_id),
            ("EMAILJS_PUBLIC_KEY", &public_key),
        ] {
            if is_placeholder(value) {
                return Err(InfrastructureError::Config(format!(
                    "{} still contains a placeholder value",
                    name
                )));
            }
        }

        Ok(Self {
            service_id,
            template_id,
            public_key,
            request_timeout_secs: std::env::var("EMAILJS_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }
}

/// EmailJS delivery channel implementation
///
/// Holds `None` for the configuration when constructed disabled; every send
/// then fails, which keeps the degraded-mode path in the core service honest.
pub struct EmailJsDelivery {
    client: Client,
    config: Option<EmailJsConfig>,
}

impl EmailJsDelivery {
    /// Create a new EmailJS delivery channel
    pub fn new(config: EmailJsConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            "EmailJS delivery initialized with service ID: {}",
            mask_credential(&config.service_id)
        );

        Ok(Self {
            client,
            config: Some(config),
        })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let config = EmailJsConfig::from_env()?;
        Self::new(config)
    }

    /// Create a channel with no credentials whose sends always fail
    pub fn disabled() -> Self {
        warn!("EmailJS delivery disabled, one-time codes will not reach recipients");
        Self {
            client: Client::new(),
            config: None,
        }
    }

    /// Whether real credentials were loaded
    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Send one code through the EmailJS send endpoint
    async fn deliver(&self, email: &str, code: &str) -> Result<(), InfrastructureError> {
        let config = self.config.as_ref().ok_or_else(|| {
            InfrastructureError::Email("EmailJS credentials are not configured".to_string())
        })?;

        let payload = serde_json::json!({
            "service_id": config.service_id,
            "template_id": config.template_id,
            "user_id": config.public_key,
            "template_params": {
                "to_email": email,
                "otp_code": code,
                "app_name": APP_NAME,
            }
        });

        debug!("Sending one-time code to {} via EmailJS", mask_email(email));

        let response = self
            .client
            .post(EMAILJS_SEND_URL)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK {
            info!("EmailJS accepted message for {}", mask_email(email));
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            error!(
                "EmailJS rejected message for {}: status {} body {}",
                mask_email(email),
                status,
                body
            );
            Err(InfrastructureError::Email(format!(
                "EmailJS returned status {}: {}",
                status, body
            )))
        }
    }
}

#[async_trait]
impl DeliveryChannel for EmailJsDelivery {
    async fn send_code(&self, email: &str, code: &str) -> Result<(), String> {
        self.deliver(email, code).await.map_err(|e| e.to_string())
    }

    fn channel_name(&self) -> &str {
        "EmailJS"
    }
}

/// Detect template values copied straight out of `.env.example`
fn is_placeholder(value: &str) -> bool {
    value.starts_with("your_") || value.contains("example")
}

/// Mask a credential for logging (first and last four characters)
fn mask_credential(value: &str) -> String {
    if value.len() <= 8 {
        "***".to_string()
    } else {
        format!("{}...{}", &value[..4], &value[value.len() - 4..])
    }
}
