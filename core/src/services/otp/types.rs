//! Types for OTP service results

/// Result of requesting a one-time code
#[derive(Debug, Clone)]
pub struct RequestCodeOutcome {
    /// Normalized email address the code was issued for
    pub email: String,
    /// Whether the delivery channel accepted the message
    pub delivered: bool,
    /// Seconds until the issued code expires
    pub expires_in_seconds: i64,
}
