//! Configuration for the authentication service

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Longest accepted display name, in characters
    pub max_name_length: usize,
    /// Shortest accepted password
    pub min_password_length: usize,
    /// Longest accepted password (bcrypt ignores bytes past 72)
    pub max_password_length: usize,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            max_name_length: 100,
            min_password_length: 6,
            max_password_length: 72,
        }
    }
}
