use actix_web::{web, HttpResponse};
use tracing::info;
use validator::Validate;

use wf_core::errors::AuthError;
use wf_core::services::{DeliveryChannel, GenerativeBackend};
use wf_shared::utils::email::mask_email;

use crate::dto::auth::{TokenResponse, VerifyOtpRequest};
use crate::handlers::error::ApiError;
use crate::routes::AppState;

/// Handler for POST /auth/verify-otp
///
/// Verifies a one-time code and exchanges it for a session token. The code
/// is single use; a second attempt with the same code fails.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "otp": "123456" }
/// ```
///
/// # Responses
///
/// * `200 OK` - `{ "token": "...", "email": "..." }`
/// * `400 Bad Request` - code is not exactly six digits
/// * `401 Unauthorized` - code is wrong, expired, or already used
pub async fn verify_otp<D, G>(
    state: web::Data<AppState<D, G>>,
    request: web::Json<VerifyOtpRequest>,
) -> Result<HttpResponse, ApiError>
where
    D: DeliveryChannel + 'static,
    G: GenerativeBackend + 'static,
{
    if request.validate().is_err() {
        return Err(AuthError::InvalidOtpFormat.into());
    }

    let outcome = state
        .auth_service
        .verify_code(&request.email, &request.otp)
        .await?;

    info!(
        email = %mask_email(&outcome.email),
        "Issued session token"
    );

    Ok(HttpResponse::Ok().json(TokenResponse {
        token: outcome.token,
        email: outcome.email,
    }))
}
