//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};
use uuid::Uuid;

use cva_core::{AuthError, DomainError, User, UserRepository};

use crate::database::storage_error;

const USER_COLUMNS: &str = "id, name, email, password_hash, is_verified, created_at, updated_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Maps database columns to User struct fields
    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(storage_error)?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid user id in database: {}", e),
            })?,
            name: row.try_get("name").map_err(storage_error)?,
            email: row.try_get("email").map_err(storage_error)?,
            password_hash: row.try_get("password_hash").map_err(storage_error)?,
            is_verified: row.try_get("is_verified").map_err(storage_error)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(storage_error)?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(storage_error)?,
        })
    }

    async fn fetch_one_where(&self, clause: &str, value: String) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE {} = ? LIMIT 1", USER_COLUMNS, clause);

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}

/// Duplicate key on the unique email index
fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.fetch_one_where("email", email.to_string()).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.fetch_one_where("id", id.to_string()).await
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, name, email, password_hash,
                is_verified, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.is_verified)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::from(AuthError::UserAlreadyExists)
                } else {
                    storage_error(e)
                }
            })?;

        Ok(user)
    }

    async fn update(&self, mut user: User) -> Result<User, DomainError> {
        user.updated_at = Utc::now();

        let query = r#"
            UPDATE users SET
                name = ?,
                email = ?,
                password_hash = ?,
                is_verified = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.is_verified)
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::from(AuthError::UserAlreadyExists)
                } else {
                    storage_error(e)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("user {}", user.id),
            });
        }

        Ok(user)
    }
}
