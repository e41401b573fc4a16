//! Configuration for the OTP service

use crate::domain::entities::otp::CODE_TTL_SECONDS;

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Number of seconds before an issued code expires
    pub code_ttl_seconds: i64,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: CODE_TTL_SECONDS,
        }
    }
}
