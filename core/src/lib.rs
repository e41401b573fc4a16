//! # Wayfarer Core
//!
//! Core business logic and domain layer for the Wayfarer backend.
//! This crate contains domain entities, business services, collaborator
//! traits, and error types that form the foundation of the application
//! architecture.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::{
    AuthOutcome, AuthService, DeliveryChannel, DeliveryHealth, DiagnosticSink, GenerativeBackend,
    HeuristicPlanner, OtpService, OtpServiceConfig, OtpStore, PlannerError, PlannerService,
    RequestCodeOutcome, TokenService, TokenServiceConfig, TracingDiagnostics, UserDirectory,
};
