//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the CVACare backend.
//! It provides concrete implementations of the collaborator interfaces
//! declared in `cva_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Cache**: Verification code stores (in-memory and Redis)
//! - **Database**: User repositories (in-memory and MySQL via SQLx)
//! - **Email**: Code delivery (logging mock and the Brevo transactional API)

pub mod cache;
pub mod database;
pub mod email;

pub use cache::{create_code_store, InMemoryCodeStore, RedisClient, RedisCodeStore};
pub use database::{
    create_user_repository, DatabasePool, InMemoryUserRepository, MySqlUserRepository,
};
pub use email::{create_notifier, BrevoEmailNotifier, MockEmailNotifier};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Stored payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email provider rejected a message
    #[error("Email service error: {0}")]
    Email(String),
}

impl From<InfrastructureError> for cva_core::StorageError {
    fn from(err: InfrastructureError) -> Self {
        cva_core::StorageError::new(err.to_string())
    }
}

impl From<InfrastructureError> for cva_core::DeliveryError {
    fn from(err: InfrastructureError) -> Self {
        cva_core::DeliveryError::new(err.to_string())
    }
}
