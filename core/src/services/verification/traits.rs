//! Collaborator interfaces consumed by the verification service

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::{rngs::OsRng, Rng};

use crate::domain::entities::verification_record::{VerificationRecord, CODE_LENGTH, MAX_CODE_VALUE};
use crate::errors::{DeliveryError, StorageError};

/// Keyed storage for verification records
///
/// Implementations must give read-your-writes consistency within a process.
/// Concurrent writers for the same subject are last-write-wins.
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Fetch the current record for a subject
    async fn get(&self, subject_id: &str) -> Result<Option<VerificationRecord>, StorageError>;

    /// Store a record, replacing any previous one for the subject
    async fn put(&self, subject_id: &str, record: &VerificationRecord) -> Result<(), StorageError>;
}

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of fresh numeric codes
pub trait CodeGenerator: Send + Sync {
    /// Returns a zero-padded code of `CODE_LENGTH` digits
    fn generate(&self) -> String;
}

/// Uniform codes over `[0, 999999]` drawn from the operating system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRngCodeGenerator;

impl CodeGenerator for OsRngCodeGenerator {
    fn generate(&self) -> String {
        // gen_range rejects out-of-zone samples, so there is no modulo bias
        let value: u32 = OsRng.gen_range(0..MAX_CODE_VALUE);
        format!("{:0width$}", value, width = CODE_LENGTH)
    }
}

/// Out-of-band delivery of a code to its subject
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, subject_id: &str, code: &str) -> Result<(), DeliveryError>;
}
