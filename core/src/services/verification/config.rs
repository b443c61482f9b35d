//! Configuration for the verification service

use chrono::Duration;
use cva_shared::config::VerificationConfig;

use crate::domain::entities::verification_record::DEFAULT_TTL_MINUTES;

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Number of minutes before a verification code expires
    pub code_ttl_minutes: i64,
    /// Minimum seconds between resends of an active code; zero disables it
    pub resend_cooldown_seconds: i64,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: DEFAULT_TTL_MINUTES,
            resend_cooldown_seconds: 0,
        }
    }
}

impl VerificationServiceConfig {
    pub fn ttl(&self) -> Duration {
        Duration::minutes(self.code_ttl_minutes)
    }

    pub fn resend_cooldown(&self) -> Option<Duration> {
        (self.resend_cooldown_seconds > 0).then(|| Duration::seconds(self.resend_cooldown_seconds))
    }
}

impl From<&VerificationConfig> for VerificationServiceConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            code_ttl_minutes: config.code_ttl_minutes,
            resend_cooldown_seconds: config.resend_cooldown_seconds,
        }
    }
}
