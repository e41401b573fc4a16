//! Main OTP service implementation

use std::sync::Arc;

use wf_shared::utils::email::{mask_email, normalize_email};

use crate::domain::entities::otp::{OtpEntry, CODE_LENGTH};

use super::config::OtpServiceConfig;
use super::health::DeliveryHealth;
use super::store::OtpStore;
use super::traits::{DeliveryChannel, DiagnosticSink, TracingDiagnostics};
use super::types::RequestCodeOutcome;

/// Service handling the one-time code lifecycle
///
/// Issues codes, stores them keyed by email address, pushes them
/// through the delivery channel and verifies user-submitted codes.
/// Delivery failures never abort the flow: the code stays valid, the
/// channel is marked degraded and the code is surfaced through the
/// diagnostic sink so operators can still complete a login.
pub struct OtpService<D: DeliveryChannel> {
    /// Channel used to deliver codes to users
    delivery: Arc<D>,
    /// Pending codes keyed by normalized email
    store: OtpStore,
    /// Shared health flag for the delivery channel
    health: DeliveryHealth,
    /// Sink for codes that could not be delivered
    diagnostics: Arc<dyn DiagnosticSink>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<D: DeliveryChannel> OtpService<D> {
    /// Create a new OTP service with the default diagnostic sink
    ///
    /// # Arguments
    ///
    /// * `delivery` - Delivery channel implementation
    /// * `config` - Service configuration
    pub fn new(delivery: Arc<D>, config: OtpServiceConfig) -> Self {
        Self::with_diagnostics(delivery, Arc::new(TracingDiagnostics), config)
    }

    /// Create a new OTP service with a custom diagnostic sink
    pub fn with_diagnostics(
        delivery: Arc<D>,
        diagnostics: Arc<dyn DiagnosticSink>,
        config: OtpServiceConfig,
    ) -> Self {
        Self {
            delivery,
            store: OtpStore::new(),
            health: DeliveryHealth::new(),
            diagnostics,
            config,
        }
    }

    /// Shared handle to the delivery health flag
    pub fn health(&self) -> DeliveryHealth {
        self.health.clone()
    }

    /// The underlying code store
    pub fn store(&self) -> &OtpStore {
        &self.store
    }

    /// Issue a one-time code for an email address and attempt delivery
    ///
    /// A fresh code replaces any previously issued code for the same
    /// address, so only the newest code can verify. The returned
    /// outcome reports whether delivery succeeded; a failed delivery is
    /// not an error, the code remains valid for the relaxed flow.
    ///
    /// # Arguments
    ///
    /// * `email` - Recipient address, normalized before use
    pub async fn request_code(&self, email: &str) -> RequestCodeOutcome {
        let email = normalize_email(email);
        let entry = OtpEntry::with_ttl(email.clone(), self.config.code_ttl_seconds);
        let code = entry.code.clone();

        self.store.insert(entry).await;
        tracing::info!(
            email = %mask_email(&email),
            event = "otp_generated",
            "Generated one-time code"
        );

        let delivered = match self.delivery.send_code(&email, &code).await {
            Ok(()) => {
                self.health.record_success(self.delivery.channel_name()).await;
                tracing::info!(
                    email = %mask_email(&email),
                    channel = self.delivery.channel_name(),
                    event = "otp_sent",
                    "One-time code delivered"
                );
                true
            }
            Err(error) => {
                self.health.record_failure(self.delivery.channel_name()).await;
                tracing::warn!(
                    email = %mask_email(&email),
                    channel = self.delivery.channel_name(),
                    error = %error,
                    event = "otp_delivery_failed",
                    "One-time code delivery failed"
                );
                self.diagnostics.reveal_code(&email, &code);
                false
            }
        };

        RequestCodeOutcome {
            email,
            delivered,
            expires_in_seconds: self.config.code_ttl_seconds,
        }
    }

    /// Verify a user-submitted code against the pending entry
    ///
    /// While the delivery channel is degraded any well-formed code is
    /// accepted without touching the store, so a provider outage does
    /// not lock users out. In the normal path the pending entry is
    /// consumed on success, removed when expired and kept on mismatch.
    ///
    /// # Arguments
    ///
    /// * `email` - Address the code was issued for
    /// * `code` - The submitted code
    ///
    /// # Returns
    ///
    /// `true` when the code is accepted
    pub async fn verify_code(&self, email: &str, code: &str) -> bool {
        let email = normalize_email(email);

        if !self.health.is_operational().await {
            let accepted =
                code.len() == CODE_LENGTH && code.chars().all(|c| c.is_ascii_digit());
            tracing::info!(
                email = %mask_email(&email),
                accepted = accepted,
                event = "otp_verified_relaxed",
                "Verified code in relaxed mode"
            );
            return accepted;
        }

        let Some(entry) = self.store.get(&email).await else {
            tracing::debug!(
                email = %mask_email(&email),
                event = "otp_not_found",
                "No pending code for address"
            );
            return false;
        };

        if entry.is_expired() {
            self.store.remove(&email).await;
            tracing::info!(
                email = %mask_email(&email),
                event = "otp_expired",
                "Pending code expired"
            );
            return false;
        }

        if !entry.matches(code) {
            tracing::warn!(
                email = %mask_email(&email),
                event = "otp_mismatch",
                "Submitted code did not match"
            );
            return false;
        }

        // Removal decides the outcome: two racing verifications can both
        // read the entry, but only one removal returns it.
        if self.store.remove(&email).await.is_none() {
            return false;
        }
        tracing::info!(
            email = %mask_email(&email),
            event = "otp_verified",
            "One-time code verified"
        );
        true
    }
}
