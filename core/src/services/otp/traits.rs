//! Traits for external dependencies of the OTP service

use async_trait::async_trait;

/// Trait for delivering one-time codes to users
///
/// Implementations live in the infrastructure layer (e.g. an EmailJS
/// client) or in tests (mock channels). Errors are plain strings so the
/// domain layer stays independent of transport-specific error types.
#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    /// Deliver a one-time code to the given email address
    ///
    /// # Arguments
    ///
    /// * `email` - Normalized recipient address
    /// * `code` - The generated one-time code
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the provider accepted the message
    /// * `Err(String)` describing why delivery failed
    async fn send_code(&self, email: &str, code: &str) -> Result<(), String>;

    /// Human-readable name of the channel, used in log events
    fn channel_name(&self) -> &str;
}

/// Sink for surfacing codes when delivery is unavailable
///
/// When the delivery channel fails, the issued code is still valid and
/// operators need a way to recover it (development environments, smoke
/// tests against broken provider credentials). Implementations decide
/// where the code ends up; the default writes a structured log line.
pub trait DiagnosticSink: Send + Sync {
    /// Surface an undelivered code for the given email address
    fn reveal_code(&self, email: &str, code: &str);
}

/// Default diagnostic sink that logs undelivered codes
#[derive(Debug, Default, Clone)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn reveal_code(&self, email: &str, code: &str) {
        tracing::warn!(
            email = email,
            code = code,
            event = "otp_delivery_fallback",
            "Delivery unavailable, surfacing one-time code in logs"
        );
    }
}
