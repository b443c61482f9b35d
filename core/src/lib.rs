//! # CVACare Core
//!
//! Core business logic and domain layer for the CVACare backend.
//! This crate contains the verification record and user entities, the
//! one-time passcode service, the account flows built on top of it, the
//! repository and collaborator interfaces, and the error taxonomy shared by
//! the infrastructure and API layers.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, User, VerificationRecord};
pub use domain::value_objects::{AuthResponse, RegistrationOutcome};
pub use errors::{
    AuthError, DeliveryError, DomainError, DomainResult, StorageError, TokenError,
    ValidationError, VerificationError,
};
pub use repositories::UserRepository;
pub use services::{
    AuthService, AuthServiceConfig, Clock, CodeGenerator, CodeStore, Notifier,
    OsRngCodeGenerator, PasswordHasher, ProfileUpdate, SystemClock, TokenService,
    TokenServiceConfig, VerificationCodeService, VerificationServiceConfig,
};
