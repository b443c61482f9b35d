//! Results of the account flows.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::User;

/// Returned after a successful login or email verification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub user: User,
    /// Bearer token for authenticated endpoints
    pub token: String,
}

impl AuthResponse {
    pub fn new(user: User, token: String) -> Self {
        Self { user, token }
    }
}

/// Returned by registration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub user_id: Uuid,
    pub email: String,
    /// Always `true`: the account must be verified before login
    pub requires_verification: bool,
    /// `false` when the email could not be delivered; the code is still valid
    pub code_sent: bool,
}
