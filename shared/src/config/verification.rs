//! Verification code (OTP) policy

use serde::{Deserialize, Serialize};

/// Lifetime and resend policy for email verification codes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Minutes an issued code stays valid
    pub code_ttl_minutes: i64,
    /// Minimum seconds between resends while a code is still active.
    /// Zero disables the cooldown.
    pub resend_cooldown_seconds: i64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: 10,
            resend_cooldown_seconds: 0,
        }
    }
}

impl VerificationConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            code_ttl_minutes: super::env_or("OTP_TTL_MINUTES", defaults.code_ttl_minutes),
            resend_cooldown_seconds: super::env_or(
                "OTP_RESEND_COOLDOWN_SECONDS",
                defaults.resend_cooldown_seconds,
            ),
        }
    }
}
