//! Session token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token expiry time in minutes
pub const SESSION_TOKEN_EXPIRY_MINUTES: i64 = 30;

/// JWT claims for a session token
///
/// The subject is the authenticated email address; sessions are
/// short-lived and there is no refresh flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the authenticated email address
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Unique token identifier
    pub jti: String,
}

impl Claims {
    /// Creates claims for a new session token
    ///
    /// # Arguments
    ///
    /// * `email` - The authenticated email address
    /// * `expiry_minutes` - Token lifetime in minutes
    pub fn new_session(email: String, expiry_minutes: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::minutes(expiry_minutes);

        Self {
            sub: email,
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// The email address this session belongs to
    pub fn email(&self) -> &str {
        &self.sub
    }

    /// Checks if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}
