//! User repository trait

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::entity::User;
use crate::domain::account::AccountId;
use crate::domain::DomainError;

/// Read access to account members
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List the non-suspended users of an account, ordered by ID
    async fn list_active_by_account(&self, account_id: AccountId) -> Result<Vec<User>, DomainError>;
}
