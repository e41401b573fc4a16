//! Bearer-token authentication extractors.
//!
//! [`AuthContext`] rejects requests without a valid session token and gives
//! the handler the authenticated email. [`OptionalAuth`] never rejects; it
//! carries the context when a valid token was presented and `None` otherwise,
//! which lets public routes personalise behaviour without requiring login.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, FromRequest, HttpRequest};
use std::future::{ready, Ready};

use crate::handlers::error::ApiError;
use wf_core::services::TokenService;

/// Authenticated caller identity extracted from a bearer token.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Email address the session token was issued for
    pub email: String,
    /// Token identifier from the JWT claims
    pub jti: String,
}

/// Pulls the raw token out of the `Authorization` header.
fn bearer_token(req: &HttpRequest) -> Result<&str, ApiError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or(ApiError::Unauthorized("Authorization header missing"))?;
    let value = header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid authorization header format"))?;
    value
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Unauthorized("Invalid authorization header format"))
}

/// Verifies the bearer token against the registered [`TokenService`].
fn authenticate(req: &HttpRequest) -> Result<AuthContext, ApiError> {
    let token = bearer_token(req)?;
    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or(ApiError::Unauthorized("Invalid authentication credentials"))?;
    let claims = token_service
        .verify_session_token(token)
        .map_err(|_| ApiError::Unauthorized("Invalid authentication credentials"))?;
    Ok(AuthContext {
        email: claims.sub,
        jti: claims.jti,
    })
}

impl FromRequest for AuthContext {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

/// Extractor for routes that accept both anonymous and authenticated callers.
pub struct OptionalAuth(pub Option<AuthContext>);

impl OptionalAuth {
    /// Returns the authenticated context, if the caller presented a valid token.
    pub fn context(&self) -> Option<&AuthContext> {
        self.0.as_ref()
    }
}

impl FromRequest for OptionalAuth {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        if req.headers().get(AUTHORIZATION).is_none() {
            return ready(Ok(OptionalAuth(None)));
        }
        ready(Ok(OptionalAuth(authenticate(req).ok())))
    }
}
