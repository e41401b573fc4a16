//! Authentication service module
//!
//! This module provides the passwordless login flow:
//! - Email validation and normalization
//! - One-time code request and verification via the OTP service
//! - User records created on first successful login
//! - Session token issuing via the token service

mod directory;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use directory::UserDirectory;
pub use service::AuthService;
pub use types::AuthOutcome;
