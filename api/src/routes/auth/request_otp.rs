use actix_web::{web, HttpResponse};
use tracing::info;
use validator::Validate;

use wf_core::errors::AuthError;
use wf_core::services::{DeliveryChannel, GenerativeBackend};
use wf_shared::utils::email::mask_email;

use crate::dto::auth::{RequestOtpRequest, RequestOtpResponse};
use crate::handlers::error::ApiError;
use crate::routes::AppState;

/// Handler for POST /auth/request-otp
///
/// Issues a one-time code for the given email address and sends it through
/// the delivery channel. The response never contains the code; when delivery
/// is down the message tells the caller that relaxed verification applies.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// # Responses
///
/// * `200 OK` - `{ "message": "..." }`
/// * `400 Bad Request` - email is missing an `@`
pub async fn request_otp<D, G>(
    state: web::Data<AppState<D, G>>,
    request: web::Json<RequestOtpRequest>,
) -> Result<HttpResponse, ApiError>
where
    D: DeliveryChannel + 'static,
    G: GenerativeBackend + 'static,
{
    if request.validate().is_err() {
        return Err(AuthError::InvalidEmailFormat.into());
    }

    let outcome = state.auth_service.request_code(&request.email).await?;

    info!(
        email = %mask_email(&outcome.email),
        delivered = outcome.delivered,
        "Processed one-time code request"
    );

    let message = if outcome.delivered {
        "OTP sent successfully to your email"
    } else {
        "Email delivery failed, but you can use any 6-digit code to login"
    };

    Ok(HttpResponse::Ok().json(RequestOtpResponse {
        message: message.to_string(),
    }))
}
