//! Error translation between the domain layer and HTTP

pub mod error;

pub use error::ApiError;
