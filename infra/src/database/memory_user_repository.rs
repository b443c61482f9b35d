//! Process-local user repository

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use cva_core::{AuthError, DomainError, User, UserRepository};

/// Keeps accounts in memory; emails are unique
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(AuthError::UserAlreadyExists.into());
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, mut user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(DomainError::NotFound {
                resource: format!("user {}", user.id),
            });
        }
        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(AuthError::UserAlreadyExists.into());
        }

        user.updated_at = Utc::now();
        users.insert(user.id, user.clone());
        Ok(user)
    }
}
