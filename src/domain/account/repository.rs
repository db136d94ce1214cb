//! Account repository trait

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::entity::{Account, AccountId};
use crate::domain::DomainError;

/// Read access to accounts
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Get an account by its internal ID
    async fn get(&self, id: AccountId) -> Result<Option<Account>, DomainError>;

    /// Verify the backing store is reachable
    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
