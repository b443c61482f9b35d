//! User persistence
//!
//! - `connection`: MySQL pool setup and schema bootstrap
//! - `mysql`: SQLx implementation of `UserRepository`
//! - `memory_user_repository`: process-local implementation for development

pub mod connection;
pub mod memory_user_repository;
pub mod mysql;

#[cfg(test)]
mod tests;

pub use connection::DatabasePool;
pub use memory_user_repository::InMemoryUserRepository;
pub use mysql::MySqlUserRepository;

use std::sync::Arc;

use cva_core::{DomainError, StorageError, UserRepository};
use cva_shared::config::{DatabaseConfig, UserStoreBackend};

use crate::InfrastructureError;

/// Convert an infrastructure failure into the domain's storage error
pub(crate) fn storage_error(err: impl Into<InfrastructureError>) -> DomainError {
    StorageError::from(err.into()).into()
}

/// Create the user repository selected by `config.backend`
///
/// The MySQL backend creates its schema on first start.
pub async fn create_user_repository(
    config: &DatabaseConfig,
) -> Result<Arc<dyn UserRepository>, InfrastructureError> {
    match config.backend {
        UserStoreBackend::Memory => {
            tracing::warn!("Using in-memory user store; accounts are lost on restart");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        UserStoreBackend::Mysql => {
            let pool = DatabasePool::new(config).await?;
            pool.run_migrations().await?;
            Ok(Arc::new(MySqlUserRepository::new(pool.get_pool().clone())))
        }
    }
}
