//! Main planner service implementation

use std::sync::Arc;

use thiserror::Error;

use crate::domain::entities::trip::{Itinerary, TripRequest};
use crate::errors::{DomainError, DomainResult};

use super::heuristic::HeuristicPlanner;
use super::prompt::build_prompt;
use super::response::parse_backend_response;
use super::traits::GenerativeBackend;

/// Failure stages of the generative pipeline
///
/// Internal to the planner: any of these downgrades the request to the
/// heuristic path instead of surfacing to the caller.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// The backend call itself failed (network, quota, auth)
    #[error("backend request failed: {0}")]
    Backend(String),

    /// The response held no parseable JSON
    #[error("response was not valid JSON: {0}")]
    Parse(String),

    /// The JSON did not match the itinerary shape
    #[error("response did not match the itinerary shape: {0}")]
    Mapping(String),
}

/// Service producing itineraries from trip requests
///
/// Tries the generative backend first and falls back to the
/// deterministic heuristic planner on any failure, so a well-formed
/// request always yields an itinerary.
pub struct PlannerService<G: GenerativeBackend> {
    /// Generative backend for drafting itineraries
    backend: Arc<G>,
}

impl<G: GenerativeBackend> PlannerService<G> {
    /// Create a new planner service
    ///
    /// # Arguments
    ///
    /// * `backend` - Generative backend implementation
    pub fn new(backend: Arc<G>) -> Self {
        Self { backend }
    }

    /// Generate an itinerary for a trip request
    ///
    /// # Arguments
    ///
    /// * `request` - The trip request
    ///
    /// # Returns
    ///
    /// * `Ok(Itinerary)` - Always, for a request with a description
    /// * `Err(DomainError)` - The trip description was empty
    pub async fn generate(&self, request: &TripRequest) -> DomainResult<Itinerary> {
        if request.trip_description.is_empty() {
            return Err(DomainError::Validation {
                message: "Trip description is required".to_string(),
            });
        }

        tracing::info!(
            days = request.days,
            tags = request.trip_tags.len(),
            has_image = request.inspiration_image.is_some(),
            event = "itinerary_requested",
            "Generating itinerary"
        );

        let itinerary = match self.try_backend(request).await {
            Ok(itinerary) => {
                tracing::info!(
                    backend = self.backend.backend_name(),
                    destination = %itinerary.destination,
                    num_days = itinerary.num_days,
                    event = "itinerary_generated",
                    "Backend produced an itinerary"
                );
                itinerary
            }
            Err(error) => {
                tracing::warn!(
                    backend = self.backend.backend_name(),
                    error = %error,
                    event = "planner_fallback",
                    "Backend failed, using heuristic planner"
                );
                HeuristicPlanner::plan(request)
            }
        };

        Ok(itinerary)
    }

    async fn try_backend(&self, request: &TripRequest) -> Result<Itinerary, PlannerError> {
        let prompt = build_prompt(request);

        let raw = self
            .backend
            .complete(&prompt)
            .await
            .map_err(PlannerError::Backend)?;

        parse_backend_response(&raw)
    }
}
