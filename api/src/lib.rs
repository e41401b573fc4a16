//! # Wayfarer API
//!
//! HTTP layer for the Wayfarer backend: route handlers, request/response
//! DTOs, error translation, and middleware. The binary entry point lives in
//! `main.rs`; everything here is exported so integration tests can assemble
//! the application with mock collaborators.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
