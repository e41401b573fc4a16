//! Type definitions shared between layers
//!
//! - `response` - error response body and health status

pub mod response;

// Re-export commonly used types at module level
pub use response::{ErrorResponse, HealthStatus};
