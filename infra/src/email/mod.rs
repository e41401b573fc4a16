//! Email Delivery Module
//!
//! This module provides email delivery implementations for sending one-time
//! login codes. It includes the production EmailJS client and a mock
//! implementation for development and tests.
//!
//! ## Features
//!
//! - **EmailJS Support**: Production delivery via the EmailJS REST API
//! - **Disabled Mode**: Missing or placeholder credentials produce a channel
//!   whose sends always fail, so the server still starts and codes surface
//!   through the diagnostic sink
//! - **Mock Implementation**: In-memory channel for development and tests
//! - **Security**: Recipient addresses masked in logs

use tracing::warn;

pub mod emailjs;
pub mod mock;

// Re-export commonly used types
pub use emailjs::{EmailJsConfig, EmailJsDelivery};
pub use mock::MockEmailDelivery;

#[cfg(test)]
mod tests;

/// Create the email delivery channel from environment variables
///
/// Configuration problems are not fatal: the server starts with a disabled
/// channel and runs in degraded mode until it is restarted with working
/// EmailJS credentials.
pub fn create_email_delivery() -> EmailJsDelivery {
    match EmailJsDelivery::from_env() {
        Ok(delivery) => delivery,
        Err(e) => {
            warn!("EmailJS delivery unavailable: {}", e);
            EmailJsDelivery::disabled()
        }
    }
}
