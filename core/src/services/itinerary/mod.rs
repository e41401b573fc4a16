//! Itinerary planning module
//!
//! This module turns trip requests into multi-day itineraries:
//! - Prompt construction and response parsing for a pluggable
//!   [`GenerativeBackend`]
//! - A deterministic heuristic planner used whenever the backend fails
//! - One service facade that always yields an itinerary for a valid
//!   request

mod catalog;
mod heuristic;
mod planner;
mod prompt;
mod response;
mod traits;

#[cfg(test)]
mod tests;

pub use heuristic::HeuristicPlanner;
pub use planner::{PlannerError, PlannerService};
pub use traits::GenerativeBackend;
