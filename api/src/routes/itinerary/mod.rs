//! Itinerary route handlers

pub mod generate;

pub use generate::generate_itinerary;
