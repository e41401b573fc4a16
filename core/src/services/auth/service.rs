//! Main authentication service implementation

use std::sync::Arc;

use wf_shared::utils::email::{is_valid_email, mask_email, normalize_email};

use crate::domain::entities::otp::CODE_LENGTH;
use crate::errors::{AuthError, DomainResult};
use crate::services::otp::{DeliveryChannel, OtpService, RequestCodeOutcome};
use crate::services::token::TokenService;

use super::directory::UserDirectory;
use super::types::AuthOutcome;

/// Service coordinating the passwordless login flow
///
/// Ties the OTP service, the token service and the user directory
/// together: requesting a code validates and normalizes the address,
/// verifying a code consumes it, records the user and issues a session
/// token.
pub struct AuthService<D: DeliveryChannel> {
    /// OTP issuing and verification
    otp_service: Arc<OtpService<D>>,
    /// Session token issuing
    token_service: Arc<TokenService>,
    /// Known users, populated on first successful verification
    users: UserDirectory,
}

impl<D: DeliveryChannel> AuthService<D> {
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `otp_service` - OTP service implementation
    /// * `token_service` - Token service implementation
    pub fn new(otp_service: Arc<OtpService<D>>, token_service: Arc<TokenService>) -> Self {
        Self {
            otp_service,
            token_service,
            users: UserDirectory::new(),
        }
    }

    /// The directory of users known to this instance
    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    /// Request a one-time code for an email address
    ///
    /// # Arguments
    ///
    /// * `email` - Recipient address, normalized before use
    ///
    /// # Returns
    ///
    /// * `Ok(RequestCodeOutcome)` - Code issued, with delivery status
    /// * `Err(DomainError)` - The address is not a plausible email
    pub async fn request_code(&self, email: &str) -> DomainResult<RequestCodeOutcome> {
        let email = normalize_email(email);

        if !is_valid_email(&email) {
            tracing::warn!(
                email = %mask_email(&email),
                event = "auth_invalid_email",
                "Rejected code request for malformed address"
            );
            return Err(AuthError::InvalidEmailFormat.into());
        }

        Ok(self.otp_service.request_code(&email).await)
    }

    /// Verify a submitted code and open a session
    ///
    /// The user record is created on first successful verification;
    /// subsequent logins reuse it. The format check runs before any
    /// lookup so malformed input is distinguishable from a wrong code.
    ///
    /// # Arguments
    ///
    /// * `email` - Address the code was issued for
    /// * `code` - The submitted code
    ///
    /// # Returns
    ///
    /// * `Ok(AuthOutcome)` - Session token and normalized address
    /// * `Err(DomainError)` - Malformed code or failed verification
    pub async fn verify_code(&self, email: &str, code: &str) -> DomainResult<AuthOutcome> {
        let email = normalize_email(email);
        let code = code.trim();

        if code.len() != CODE_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(AuthError::InvalidOtpFormat.into());
        }

        if !self.otp_service.verify_code(&email, code).await {
            tracing::warn!(
                email = %mask_email(&email),
                event = "auth_verification_failed",
                "Code verification failed"
            );
            return Err(AuthError::InvalidOtp.into());
        }

        let user = self.users.get_or_create(&email).await;
        let token = self.token_service.generate_session_token(&email)?;

        tracing::info!(
            email = %mask_email(&email),
            user_id = %user.id,
            event = "auth_login_succeeded",
            "User authenticated"
        );

        Ok(AuthOutcome { token, email })
    }
}
