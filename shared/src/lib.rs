//! Shared utilities and common types for the CVACare server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The JSON response envelope returned by every endpoint
//! - Email normalization, validation and log masking

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, CodeStoreBackend, DatabaseConfig, EmailConfig,
    EmailProvider, Environment, LoggingConfig, ServerConfig, UserStoreBackend,
    VerificationConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::ApiResponse;
pub use utils::email;
