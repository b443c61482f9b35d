//! Domain-specific error types and error handling.

mod types;


pub use types::{
    AuthError, DeliveryError, StorageError, TokenError, ValidationError, VerificationError,
};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DomainError {
    /// Whether the caller may retry the same request without user action
    pub fn is_retriable(&self) -> bool {
        matches!(self, DomainError::Verification(VerificationError::Storage(_)))
    }
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::Verification(VerificationError::Storage(err))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
