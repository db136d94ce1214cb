//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::account::AccountId;
use crate::domain::user::{User, UserId, UserRepository, UserRole};
use crate::domain::DomainError;

/// PostgreSQL implementation of UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list_active_by_account(&self, account_id: AccountId) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, uuid, account_id, email, name, role, email_verified, suspended,
                   created_at, updated_at
            FROM users
            WHERE account_id = $1 AND suspended = FALSE
            ORDER BY id
            "#,
        )
        .bind(account_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        rows.iter().map(row_to_user).collect()
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let id: i64 = row.get("id");
    let uuid: String = row.get("uuid");
    let account_id: i64 = row.get("account_id");
    let email: String = row.get("email");
    let name: String = row.get("name");
    let role_str: String = row.get("role");
    let email_verified: bool = row.get("email_verified");
    let suspended: bool = row.get("suspended");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
    let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

    let role = UserRole::parse(&role_str).ok_or_else(|| {
        DomainError::storage(format!("Invalid role '{}' for user '{}'", role_str, id))
    })?;

    Ok(
        User::new(UserId::new(id), AccountId::new(account_id), email, name)
            .with_uuid(uuid)
            .with_role(role)
            .with_email_verified(email_verified)
            .with_suspended(suspended)
            .with_timestamps(created_at, updated_at),
    )
}
