//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Fallback secret shipped for local development only
const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

/// JWT session-token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for HS256 signing
    pub secret: String,

    /// Session token expiry in minutes
    pub token_expiry_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            token_expiry_minutes: 30,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token expiry in minutes
    pub fn with_expiry_minutes(mut self, minutes: i64) -> Self {
        self.token_expiry_minutes = minutes;
        self
    }

    /// Load from `JWT_SECRET_KEY` / `JWT_TOKEN_EXPIRY_MINUTES`
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET_KEY").unwrap_or_else(|_| String::from(DEFAULT_SECRET));
        let token_expiry_minutes = std::env::var("JWT_TOKEN_EXPIRY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            secret,
            token_expiry_minutes,
        }
    }

    /// Check if using the default secret (security warning; fatal in production)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}
