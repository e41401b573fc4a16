//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Wayfarer backend,
//! following Clean Architecture principles. It provides concrete implementations
//! for the external collaborators the core services depend on.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Email**: One-time code delivery via the EmailJS REST API
//! - **AI**: Itinerary drafting via the Gemini REST API
//!
//! Both clients implement traits defined in `wf_core`, so the core services
//! never see HTTP types or provider credentials.

// Re-export core error types for convenience
pub use wf_core::errors::*;

/// Email delivery module - EmailJS client and mock channel
pub mod email;

/// Generative AI module - Gemini client
pub mod ai;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email delivery error
    #[error("Email delivery error: {0}")]
    Email(String),

    /// Generative model error
    #[error("Model error: {0}")]
    Model(String),
}
