//! Shared utilities and common types for the Wayfarer server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from environment variables
//! - Response structures shared between layers
//! - Utility functions (email normalization, masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, JwtConfig, ServerConfig};
pub use types::{ErrorResponse, HealthStatus};
pub use utils::email;
