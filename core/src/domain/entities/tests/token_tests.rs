//! Unit tests for JWT claims

use uuid::Uuid;

use crate::domain::entities::token::{Claims, JWT_ISSUER};

#[test]
fn test_new_claims() {
    let user_id = Uuid::new_v4();
    let claims = Claims::new(user_id, JWT_ISSUER, 30);

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.iss, JWT_ISSUER);
    assert_eq!(claims.exp - claims.iat, 30 * 24 * 60 * 60);
    assert!(!claims.is_expired());
}

#[test]
fn test_expired_claims() {
    let claims = Claims::new(Uuid::new_v4(), JWT_ISSUER, -1);
    assert!(claims.is_expired());
}

#[test]
fn test_invalid_subject() {
    let mut claims = Claims::new(Uuid::new_v4(), JWT_ISSUER, 1);
    claims.sub = "not-a-uuid".to_string();
    assert!(claims.user_id().is_err());
}
