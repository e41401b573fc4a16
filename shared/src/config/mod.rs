//! Configuration module
//!
//! All runtime configuration comes from environment variables (loaded from
//! `.env` by the binary via `dotenvy`). Sub-modules:
//! - `auth` - JWT signing configuration
//! - `environment` - deployment environment detection
//! - `server` - HTTP server bind configuration

pub mod auth;
pub mod environment;
pub mod server;

// Re-export commonly used types
pub use auth::JwtConfig;
pub use environment::Environment;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,

    /// Server bind configuration
    pub server: ServerConfig,

    /// JWT signing configuration
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Assemble the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            jwt: JwtConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            jwt: JwtConfig::default(),
        }
    }
}
