//! Password hashing backed by bcrypt

use crate::errors::DomainError;

/// Hashes and checks account passwords
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, plain: &str) -> Result<String, DomainError> {
        bcrypt::hash(plain, self.cost).map_err(|e| DomainError::Internal {
            message: format!("password hashing failed: {}", e),
        })
    }

    /// A malformed stored hash counts as a mismatch
    pub fn verify(&self, plain: &str, hash: &str) -> bool {
        match bcrypt::verify(plain, hash) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!(error = %e, event = "password_hash_unreadable", "Stored password hash could not be parsed");
                false
            }
        }
    }
}
