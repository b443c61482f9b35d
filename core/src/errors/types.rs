//! Error kinds for verification, authentication, tokens and input validation
//!
//! The distinction between kinds matters to end users: an expired code and a
//! wrong code call for different guidance, so each kind stays separate all the
//! way to the HTTP layer.

use thiserror::Error;

/// Failure reported by a code or user store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("storage error: {0}")]
pub struct StorageError(pub String);

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Failure reported by a notifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("delivery error: {0}")]
pub struct DeliveryError(pub String);

impl DeliveryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Outcomes of issuing and checking one-time codes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Subject identifier must not be empty")]
    InvalidSubject,

    #[error("Verification code must be exactly 6 digits")]
    MalformedCode,

    #[error("No verification code has been issued for this account")]
    NotFound,

    #[error("Verification code has expired")]
    Expired,

    #[error("Verification code has already been used")]
    AlreadyConsumed,

    #[error("Invalid verification code")]
    Mismatch,

    #[error("User is already verified")]
    AlreadyVerified,

    #[error("Please wait {retry_after_seconds} seconds before requesting a new code")]
    ResendTooSoon { retry_after_seconds: i64 },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User already exists with this email")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Please verify your email first")]
    EmailNotVerified,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Not authorized, no token")]
    MissingToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Not authorized, token failed")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    RequiredField { field: String },

    #[error("Please provide a valid email")]
    InvalidEmail,

    #[error("{field} must be between {min} and {max} characters")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
    },
}

impl ValidationError {
    /// Name of the offending request field
    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field } => field,
            ValidationError::InvalidEmail => "email",
            ValidationError::InvalidLength { field, .. } => field,
        }
    }
}
