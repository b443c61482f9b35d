//! Redis-backed code store
//!
//! Records are stored as JSON under `{prefix}:otp:{subject}` with `SET EX`.
//! The key outlives `expires_at` by a grace period so a late attempt is
//! reported as expired rather than as never issued.

use async_trait::async_trait;
use chrono::Utc;
use tracing::error;

use cva_core::{CodeStore, StorageError, VerificationRecord};

use super::redis_client::RedisClient;
use crate::InfrastructureError;

/// Seconds a record is retained after it expires
pub const RETENTION_GRACE_SECONDS: i64 = 24 * 60 * 60;

/// Stores one record per subject in Redis
#[derive(Clone)]
pub struct RedisCodeStore {
    client: RedisClient,
}

impl RedisCodeStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn key(&self, subject_id: &str) -> String {
        self.client.config().make_key(&format!("otp:{}", subject_id))
    }

    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        self.client.health_check().await
    }
}

/// Key lifetime for a record written now
pub(crate) fn retention_seconds(record: &VerificationRecord) -> u64 {
    let remaining = (record.expires_at - Utc::now()).num_seconds().max(0);
    (remaining + RETENTION_GRACE_SECONDS) as u64
}

#[async_trait]
impl CodeStore for RedisCodeStore {
    async fn get(&self, subject_id: &str) -> Result<Option<VerificationRecord>, StorageError> {
        let Some(payload) = self.client.get(&self.key(subject_id)).await? else {
            return Ok(None);
        };

        serde_json::from_str(&payload).map(Some).map_err(|e| {
            error!(error = %e, event = "otp_record_corrupt", "Stored verification record is unreadable");
            InfrastructureError::from(e).into()
        })
    }

    async fn put(&self, subject_id: &str, record: &VerificationRecord) -> Result<(), StorageError> {
        let payload = serde_json::to_string(record).map_err(InfrastructureError::from)?;
        self.client
            .set_with_expiry(&self.key(subject_id), &payload, retention_seconds(record))
            .await?;
        Ok(())
    }
}
