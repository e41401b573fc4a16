//! Authentication route handlers
//!
//! This module contains the passwordless login endpoints:
//! - Requesting a one-time code by email
//! - Verifying a code and receiving a session token

pub mod request_otp;
pub mod verify_otp;

pub use request_otp::request_otp;
pub use verify_otp::verify_otp;
