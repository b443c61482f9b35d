//! Configuration for the token service

use cva_shared::config::AuthConfig;
use jsonwebtoken::Algorithm;

use crate::domain::entities::token::JWT_ISSUER;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Token lifetime in days
    pub expiry_days: i64,
    /// Value of the `iss` claim
    pub issuer: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            expiry_days: 30,
            issuer: JWT_ISSUER.to_string(),
        }
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            algorithm: Algorithm::HS256,
            expiry_days: config.jwt_expiry_days,
            issuer: config.jwt_issuer.clone(),
        }
    }
}
