//! Domain-specific error types for authentication and token operations.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Invalid OTP format")]
    InvalidOtpFormat,

    #[error("Invalid or expired OTP")]
    InvalidOtp,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
