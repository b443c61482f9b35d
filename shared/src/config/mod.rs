//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT signing and password hashing
//! - `cache` - Verification code store selection and Redis settings
//! - `database` - User store selection and MySQL pool settings
//! - `email` - Outbound email provider for verification codes
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server binding
//! - `verification` - OTP lifetime and resend policy

pub mod auth;
pub mod cache;
pub mod database;
pub mod email;
pub mod environment;
pub mod server;
pub mod verification;

use serde::{Deserialize, Serialize};

pub use auth::AuthConfig;
pub use cache::{CacheConfig, CodeStoreBackend};
pub use database::{DatabaseConfig, UserStoreBackend};
pub use email::{EmailConfig, EmailProvider};
pub use environment::{Environment, LoggingConfig};
pub use server::ServerConfig;
pub use verification::VerificationConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub verification: VerificationConfig,
    pub cache: CacheConfig,
    pub database: DatabaseConfig,
    pub email: EmailConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load every section from environment variables
    ///
    /// Callers are expected to have loaded any `.env` file beforehand.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            auth: AuthConfig::from_env(),
            verification: VerificationConfig::from_env(),
            cache: CacheConfig::from_env(),
            database: DatabaseConfig::from_env(),
            email: EmailConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }

    /// Settings that must not reach production unchanged
    pub fn production_warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if !self.environment.is_production() {
            return warnings;
        }
        if self.auth.is_using_default_secret() {
            warnings.push("JWT_SECRET is not set; tokens are signed with the development secret");
        }
        if self.email.provider == EmailProvider::Mock {
            warnings.push("EMAIL_PROVIDER is mock; verification codes are only logged");
        }
        if self.cache.backend == CodeStoreBackend::Memory {
            warnings.push("CODE_STORE is memory; verification codes are lost on restart");
        }
        warnings
    }
}

/// Read an environment variable and parse it, falling back to `default`
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
