use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequestOtpRequest {
    /// Email address to deliver the one-time code to.
    /// Only presence is checked here; the service validates the shape.
    #[validate(length(min = 1))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    /// Email address the code was issued for.
    /// Deliberately unvalidated: a wrong address fails verification with a
    /// 401 rather than a format error, matching the login contract.
    pub email: String,

    /// 6-digit one-time code
    #[validate(length(equal = 6))]
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestOtpResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed session token (JWT)
    pub token: String,
    /// Normalized email address the session belongs to
    pub email: String,
}
