//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use wf_shared::utils::email::mask_email;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and validating session tokens
///
/// Sessions are stateless HS256 JWTs whose subject is the verified
/// email address. There is no refresh flow and no revocation list; a
/// token simply expires.
pub struct TokenService {
    /// Service configuration
    config: TokenServiceConfig,
    /// Cached encoding key derived from the signing secret
    encoding_key: EncodingKey,
    /// Cached decoding key derived from the signing secret
    decoding_key: DecodingKey,
    /// Validation rules applied when decoding
    validation: Validation,
}

impl TokenService {
    /// Create a new token service
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issue a session token for a verified email address
    ///
    /// # Arguments
    ///
    /// * `email` - The authenticated email address
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed JWT
    /// * `Err(DomainError)` - Signing failed
    pub fn generate_session_token(&self, email: &str) -> DomainResult<String> {
        let claims = Claims::new_session(email.to_string(), self.config.expiry_minutes);

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;

        tracing::debug!(
            email = %mask_email(email),
            jti = %claims.jti,
            event = "session_token_issued",
            "Issued session token"
        );

        Ok(token)
    }

    /// Validate a session token and return its claims
    ///
    /// # Arguments
    ///
    /// * `token` - The JWT to validate
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(DomainError)` - Token is expired, malformed or signed with
    ///   a different secret
    pub fn verify_session_token(&self, token: &str) -> DomainResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::TokenExpired)
                } else {
                    DomainError::Token(TokenError::InvalidToken)
                }
            })?;

        Ok(token_data.claims)
    }
}
