//! Tests for the OTP service

#[cfg(test)]
mod mocks;
