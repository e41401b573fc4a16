//! OTP service module for passwordless email authentication
//!
//! This module provides the one-time code workflow:
//! - Code generation and in-memory storage, one pending code per address
//! - Delivery through a pluggable [`DeliveryChannel`]
//! - Health tracking with a relaxed verification mode during provider
//!   outages
//! - Single-use verification with expiry handling

mod config;
mod health;
mod service;
mod store;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use health::DeliveryHealth;
pub use service::OtpService;
pub use store::OtpStore;
pub use traits::{DeliveryChannel, DiagnosticSink, TracingDiagnostics};
pub use types::RequestCodeOutcome;
