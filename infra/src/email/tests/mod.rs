//! Unit tests for the email delivery module

#[cfg(test)]
pub mod mock_tests;
