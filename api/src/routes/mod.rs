//! Route handlers grouped by resource

use std::sync::Arc;

use wf_core::services::{AuthService, DeliveryChannel, GenerativeBackend, PlannerService};

pub mod auth;
pub mod itinerary;

/// Application state that holds the shared services
///
/// Generic over the collaborator traits so tests can run the full HTTP
/// surface against mock delivery and mock model backends.
pub struct AppState<D, G>
where
    D: DeliveryChannel + 'static,
    G: GenerativeBackend + 'static,
{
    pub auth_service: Arc<AuthService<D>>,
    pub planner_service: Arc<PlannerService<G>>,
}
