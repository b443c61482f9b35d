//! Process-local code store

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use cva_core::{CodeStore, StorageError, VerificationRecord};

/// Keeps records in memory until overwritten
///
/// Nothing is evicted; an expired record stays so that verification can
/// still report it as expired.
#[derive(Default)]
pub struct InMemoryCodeStore {
    records: RwLock<HashMap<String, VerificationRecord>>,
}

impl InMemoryCodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl CodeStore for InMemoryCodeStore {
    async fn get(&self, subject_id: &str) -> Result<Option<VerificationRecord>, StorageError> {
        Ok(self.records.read().await.get(subject_id).cloned())
    }

    async fn put(&self, subject_id: &str, record: &VerificationRecord) -> Result<(), StorageError> {
        self.records
            .write()
            .await
            .insert(subject_id.to_string(), record.clone());
        Ok(())
    }
}
