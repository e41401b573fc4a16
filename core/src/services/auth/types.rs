//! Types for authentication results

/// Result of a successful code verification
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    /// Signed session token for subsequent requests
    pub token: String,
    /// Normalized email address the session belongs to
    pub email: String,
}
