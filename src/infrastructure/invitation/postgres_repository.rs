//! PostgreSQL invitation repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::account::AccountId;
use crate::domain::invitation::{Invitation, InvitationId, InvitationQuery, InvitationRepository};
use crate::domain::user::{UserId, UserRole};
use crate::domain::DomainError;

/// PostgreSQL implementation of InvitationRepository
#[derive(Debug, Clone)]
pub struct PostgresInvitationRepository {
    pool: PgPool,
}

impl PostgresInvitationRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvitationRepository for PostgresInvitationRepository {
    async fn list_pending(&self, query: &InvitationQuery) -> Result<Vec<Invitation>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, account_id, email, name, role, invited_by, expires_at, accepted,
                   created_at, updated_at
            FROM invitations
            WHERE account_id = $1 AND accepted = FALSE AND expires_at > $2
            ORDER BY id
            "#,
        )
        .bind(query.account_id.value())
        .bind(query.reference_time())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list invitations: {}", e)))?;

        rows.iter().map(row_to_invitation).collect()
    }
}

fn row_to_invitation(row: &sqlx::postgres::PgRow) -> Result<Invitation, DomainError> {
    let id: i64 = row.get("id");
    let account_id: i64 = row.get("account_id");
    let email: String = row.get("email");
    let name: String = row.get("name");
    let role_str: String = row.get("role");
    let invited_by: i64 = row.get("invited_by");
    let expires_at: chrono::DateTime<chrono::Utc> = row.get("expires_at");
    let accepted: bool = row.get("accepted");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
    let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

    let role = UserRole::parse(&role_str).ok_or_else(|| {
        DomainError::storage(format!("Invalid role '{}' for invitation '{}'", role_str, id))
    })?;

    Ok(Invitation::new(
        InvitationId::new(id),
        AccountId::new(account_id),
        email,
        name,
        UserId::new(invited_by),
    )
    .with_role(role)
    .with_expires_at(expires_at)
    .with_accepted(accepted)
    .with_timestamps(created_at, updated_at))
}
