//! Verification code stores
//!
//! Two `CodeStore` implementations are provided: a process-local map for
//! development and tests, and a Redis-backed store for shared deployments.

pub mod memory_code_store;
pub mod redis_client;
pub mod redis_code_store;


pub use memory_code_store::InMemoryCodeStore;
pub use redis_client::RedisClient;
pub use redis_code_store::RedisCodeStore;

use std::sync::Arc;

use cva_core::CodeStore;
use cva_shared::config::{CacheConfig, CodeStoreBackend};

use crate::InfrastructureError;

/// Create the code store selected by `config.backend`
pub async fn create_code_store(
    config: &CacheConfig,
) -> Result<Arc<dyn CodeStore>, InfrastructureError> {
    match config.backend {
        CodeStoreBackend::Memory => {
            tracing::warn!("Using in-memory code store; codes are lost on restart");
            Ok(Arc::new(InMemoryCodeStore::new()))
        }
        CodeStoreBackend::Redis => {
            let client = RedisClient::new(config.clone()).await?;
            Ok(Arc::new(RedisCodeStore::new(client)))
        }
    }
}
