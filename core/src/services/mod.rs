//! Business logic services
//!
//! This module contains the application services that orchestrate the
//! domain entities:
//! - `otp`: one-time code issuing, storage and verification
//! - `token`: JWT session token generation and validation
//! - `auth`: the combined passwordless login flow
//! - `itinerary`: AI-backed trip planning with a heuristic fallback

pub mod auth;
pub mod itinerary;
pub mod otp;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthOutcome, AuthService, UserDirectory};
pub use itinerary::{GenerativeBackend, HeuristicPlanner, PlannerError, PlannerService};
pub use otp::{
    DeliveryChannel, DeliveryHealth, DiagnosticSink, OtpService, OtpServiceConfig, OtpStore,
    RequestCodeOutcome, TracingDiagnostics,
};
pub use token::{TokenService, TokenServiceConfig};
