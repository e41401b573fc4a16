//! Configuration for the token service

use wf_shared::config::JwtConfig;

use crate::domain::entities::token::SESSION_TOKEN_EXPIRY_MINUTES;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Session token expiry in minutes
    pub expiry_minutes: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "your-secret-key-change-in-production".to_string(),
            expiry_minutes: SESSION_TOKEN_EXPIRY_MINUTES,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            expiry_minutes: config.token_expiry_minutes,
        }
    }
}
