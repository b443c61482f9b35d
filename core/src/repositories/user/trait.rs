//! User repository trait defining the interface for account persistence.
//!
//! The store itself is an external collaborator: the core only relies on
//! lookups by email and id, creation, and whole-record updates.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Emails passed in are already normalized (trimmed, lowercase).
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by normalized email
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with this email
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// Fails with `AuthError::UserAlreadyExists` when the email is taken.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Replace an existing user record
    ///
    /// Fails with `DomainError::NotFound` when no user has this id.
    async fn update(&self, user: User) -> Result<User, DomainError>;
}
