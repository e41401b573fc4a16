//! Unit tests for token service

use crate::domain::entities::token::SESSION_TOKEN_EXPIRY_MINUTES;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: "test-secret-for-unit-tests".to_string(),
        expiry_minutes: SESSION_TOKEN_EXPIRY_MINUTES,
    }
}

#[test]
fn test_generate_and_verify_round_trip() {
    let service = TokenService::new(test_config());

    let token = service.generate_session_token("user@example.com").unwrap();
    assert_eq!(token.split('.').count(), 3);

    let claims = service.verify_session_token(&token).unwrap();
    assert_eq!(claims.email(), "user@example.com");
    assert_eq!(
        claims.exp - claims.iat,
        SESSION_TOKEN_EXPIRY_MINUTES * 60
    );
}

#[test]
fn test_verify_rejects_garbage() {
    let service = TokenService::new(test_config());

    let result = service.verify_session_token("not-a-jwt");
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
}

#[test]
fn test_verify_rejects_tampered_token() {
    let service = TokenService::new(test_config());

    let token = service.generate_session_token("user@example.com").unwrap();
    let mut parts: Vec<&str> = token.split('.').collect();
    let tampered_payload = parts[1].replacen(|c: char| c.is_ascii_alphanumeric(), "x", 1);
    parts[1] = &tampered_payload;
    let tampered = parts.join(".");

    assert!(service.verify_session_token(&tampered).is_err());
}

#[test]
fn test_verify_rejects_wrong_secret() {
    let issuing = TokenService::new(test_config());
    let verifying = TokenService::new(TokenServiceConfig {
        jwt_secret: "another-secret-entirely".to_string(),
        expiry_minutes: SESSION_TOKEN_EXPIRY_MINUTES,
    });

    let token = issuing.generate_session_token("user@example.com").unwrap();
    let result = verifying.verify_session_token(&token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
}

#[test]
fn test_verify_rejects_expired_token() {
    let service = TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret-for-unit-tests".to_string(),
        expiry_minutes: -5,
    });

    let token = service.generate_session_token("user@example.com").unwrap();
    let result = service.verify_session_token(&token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn test_tokens_carry_unique_ids() {
    let service = TokenService::new(test_config());

    let a = service.generate_session_token("user@example.com").unwrap();
    let b = service.generate_session_token("user@example.com").unwrap();

    let claims_a = service.verify_session_token(&a).unwrap();
    let claims_b = service.verify_session_token(&b).unwrap();
    assert_ne!(claims_a.jti, claims_b.jti);
}
