//! PostgreSQL account repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::account::{Account, AccountId, AccountRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of AccountRepository
#[derive(Debug, Clone)]
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn get(&self, id: AccountId) -> Result<Option<Account>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, uuid, name, is_capped, found_us, created_at, updated_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get account: {}", e)))?;

        Ok(row.as_ref().map(row_to_account))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Database unreachable: {}", e)))?;

        Ok(())
    }
}

fn row_to_account(row: &sqlx::postgres::PgRow) -> Account {
    let id: i64 = row.get("id");
    let uuid: String = row.get("uuid");
    let name: String = row.get("name");
    let is_capped: bool = row.get("is_capped");
    let found_us: Option<String> = row.get("found_us");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
    let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

    let account = Account::new(AccountId::new(id), uuid, name)
        .with_capped(is_capped)
        .with_timestamps(created_at, updated_at);

    match found_us {
        Some(found_us) => account.with_found_us(found_us),
        None => account,
    }
}
