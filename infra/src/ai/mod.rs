//! Generative AI Module
//!
//! This module provides the generative backend used to draft itineraries.
//!
//! ## Features
//!
//! - **Gemini Support**: Google Generative Language REST API
//! - **Startup Probe**: List-models call validates credentials before the
//!   server accepts traffic
//! - **Mock Backend**: Canned-response implementation for tests
//! - **Security**: API key sent as a request header, never logged

pub mod gemini;
pub mod mock;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use gemini::{GeminiClient, GeminiConfig};
pub use mock::MockGenerativeBackend;
