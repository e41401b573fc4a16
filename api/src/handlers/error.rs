//! Maps domain errors onto HTTP responses.
//!
//! Every handler returns `Result<HttpResponse, ApiError>`; actix invokes
//! [`ResponseError`] on the error branch so the JSON error body is built in
//! exactly one place.

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use tracing::{error, warn};

use wf_core::errors::{AuthError, DomainError, TokenError};
use wf_shared::types::ErrorResponse;

/// Error type returned by every HTTP handler.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Failure raised by the domain services.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Bearer credential missing or rejected before a handler ran.
    #[error("{0}")]
    Unauthorized(&'static str),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Domain(err.into())
    }
}

impl ApiError {
    /// Resolves the status code, machine-readable error code and client
    /// message for this error.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::Domain(DomainError::Auth(err)) => match err {
                AuthError::InvalidEmailFormat => (
                    StatusCode::BAD_REQUEST,
                    "invalid_email",
                    err.to_string(),
                ),
                AuthError::InvalidOtpFormat => (
                    StatusCode::BAD_REQUEST,
                    "invalid_otp",
                    err.to_string(),
                ),
                AuthError::InvalidOtp => (
                    StatusCode::UNAUTHORIZED,
                    "invalid_credentials",
                    err.to_string(),
                ),
            },
            ApiError::Domain(DomainError::Token(err)) => match err {
                TokenError::TokenExpired => {
                    (StatusCode::UNAUTHORIZED, "token_expired", err.to_string())
                }
                TokenError::InvalidToken => {
                    (StatusCode::UNAUTHORIZED, "invalid_token", err.to_string())
                }
                TokenError::TokenGenerationFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    err.to_string(),
                ),
            },
            ApiError::Domain(DomainError::Validation { message }) => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message.clone(),
            ),
            ApiError::Domain(DomainError::Internal { message }) => {
                error!("Internal error reached the HTTP boundary: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, "unauthorized", message.to_string())
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status, code, message) = self.parts();
        if status.is_server_error() {
            error!(status = status.as_u16(), code, "Request failed: {}", message);
        } else {
            warn!(status = status.as_u16(), code, "Request rejected: {}", message);
        }
        HttpResponse::build(status).json(ErrorResponse::new(code, message))
    }
}

/// Converts JSON deserialization failures into the standard error body.
///
/// Registered on [`actix_web::web::JsonConfig`] so malformed payloads produce
/// the same envelope as domain failures instead of actix's plain-text default.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    let response =
        HttpResponse::BadRequest().json(ErrorResponse::new("invalid_request", message));
    InternalError::from_response(err, response).into()
}
