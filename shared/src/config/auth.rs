//! Authentication configuration: session tokens and password hashing

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT and password hashing settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Session token lifetime in days
    pub jwt_expiry_days: i64,
    /// JWT issuer claim
    pub jwt_issuer: String,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEFAULT_SECRET.to_string(),
            jwt_expiry_days: 30,
            jwt_issuer: "cvacare".to_string(),
            bcrypt_cost: 10,
        }
    }
}

impl AuthConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            jwt_secret: std::env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            jwt_expiry_days: super::env_or("JWT_EXPIRY_DAYS", defaults.jwt_expiry_days),
            jwt_issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.jwt_issuer),
            bcrypt_cost: super::env_or("BCRYPT_COST", defaults.bcrypt_cost),
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_SECRET
    }
}
