//! Token service module for JWT session management
//!
//! This module handles session token operations:
//! - HS256 session token generation for verified email addresses
//! - Token validation with expiry checking

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
