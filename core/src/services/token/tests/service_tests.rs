//! Unit tests for the token service

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        ..Default::default()
    })
}

#[test]
fn test_generate_and_validate() {
    let service = service();
    let user_id = Uuid::new_v4();

    let token = service.generate(user_id).unwrap();
    let claims = service.validate(&token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.iss, "cvacare");
    assert_eq!(claims.exp - claims.iat, Duration::days(30).num_seconds());
}

#[test]
fn test_expired_token_is_rejected() {
    let service = service();
    let now = Utc::now();
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        iat: (now - Duration::days(31)).timestamp(),
        exp: (now - Duration::days(1)).timestamp(),
        iss: "cvacare".to_string(),
    };
    let token = service.encode_jwt(&claims).unwrap();

    assert_eq!(service.validate(&token), Err(TokenError::TokenExpired));
}

#[test]
fn test_token_signed_with_other_secret_is_invalid() {
    let other = TokenService::new(TokenServiceConfig {
        jwt_secret: "another-secret".to_string(),
        ..Default::default()
    });
    let token = other.generate(Uuid::new_v4()).unwrap();

    assert_eq!(service().validate(&token), Err(TokenError::InvalidToken));
}

#[test]
fn test_wrong_issuer_is_invalid() {
    let foreign = TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        issuer: "someone-else".to_string(),
        ..Default::default()
    });
    let token = foreign.generate(Uuid::new_v4()).unwrap();

    assert_eq!(service().validate(&token), Err(TokenError::InvalidToken));
}

#[test]
fn test_garbage_is_invalid() {
    assert_eq!(service().validate("not.a.jwt"), Err(TokenError::InvalidToken));
    assert_eq!(service().validate(""), Err(TokenError::InvalidToken));
}
