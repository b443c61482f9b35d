//! User entity representing a registered patient or caregiver account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Normalized lowercase email, unique across users
    pub email: String,

    /// bcrypt hash, never sent to clients
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Whether the email address has been verified by OTP
    pub is_verified: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new unverified user
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the user as verified
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.updated_at = Utc::now();
    }

    /// Changes the display name
    pub fn rename(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Changes the email address
    pub fn change_email(&mut self, email: String) {
        self.email = email;
        self.updated_at = Utc::now();
    }
}
