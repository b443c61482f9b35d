//! Verification record entity for email one-time passcodes.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Exclusive upper bound of the numeric code space
pub const MAX_CODE_VALUE: u32 = 1_000_000;

/// Default lifetime of an issued code
pub const DEFAULT_TTL_MINUTES: i64 = 10;

/// A one-time code bound to a subject (normalized email)
///
/// At most one record exists per subject; issuing again replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Normalized lowercase email the code was issued for
    pub subject_id: String,

    /// The zero-padded 6-digit code
    pub code: String,

    /// When the code was issued
    pub issued_at: DateTime<Utc>,

    /// `issued_at + TTL`
    pub expires_at: DateTime<Utc>,

    /// Set once, by a successful verification
    pub consumed: bool,
}

impl VerificationRecord {
    /// Creates an unconsumed record valid for `ttl` from `issued_at`
    pub fn new(subject_id: String, code: String, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            subject_id,
            code,
            issued_at,
            expires_at: issued_at + ttl,
            consumed: false,
        }
    }

    /// A record is expired strictly after `expires_at`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Neither consumed nor expired
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        !self.consumed && !self.is_expired_at(now)
    }

    /// Time left before expiry, zero once expired
    pub fn time_remaining_at(&self, now: DateTime<Utc>) -> Duration {
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }

    /// Marks the record as consumed
    pub fn mark_consumed(&mut self) {
        self.consumed = true;
    }
}

/// Exactly `CODE_LENGTH` ASCII digits
pub fn is_well_formed_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
}
