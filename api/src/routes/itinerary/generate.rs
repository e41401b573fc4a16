use actix_web::{web, HttpResponse};
use tracing::debug;

use wf_core::domain::entities::TripRequest;
use wf_core::services::{DeliveryChannel, GenerativeBackend};
use wf_shared::utils::email::mask_email;

use crate::handlers::error::ApiError;
use crate::middleware::auth::OptionalAuth;
use crate::routes::AppState;

/// Handler for POST /api/generate-itinerary
///
/// Builds a multi-day itinerary from the trip request. The generative
/// backend drafts it when reachable; otherwise the heuristic planner takes
/// over inside the service, so the route only fails on an empty description.
///
/// Authentication is optional here: a valid bearer token is noted for
/// logging, anything else is served anonymously.
///
/// # Responses
///
/// * `200 OK` - the itinerary
/// * `400 Bad Request` - `trip_description` is empty
pub async fn generate_itinerary<D, G>(
    state: web::Data<AppState<D, G>>,
    auth: OptionalAuth,
    request: web::Json<TripRequest>,
) -> Result<HttpResponse, ApiError>
where
    D: DeliveryChannel + 'static,
    G: GenerativeBackend + 'static,
{
    if let Some(context) = auth.context() {
        debug!(
            email = %mask_email(&context.email),
            "Planning request from authenticated user"
        );
    }

    let itinerary = state.planner_service.generate(&request).await?;

    Ok(HttpResponse::Ok().json(itinerary))
}
