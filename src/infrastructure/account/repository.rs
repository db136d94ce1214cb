//! In-memory account repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::account::{Account, AccountId, AccountRepository};
use crate::domain::DomainError;

/// In-memory implementation of AccountRepository
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<BTreeMap<AccountId, Account>>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial accounts
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        let map = accounts.into_iter().map(|a| (a.id(), a)).collect();

        Self {
            accounts: Arc::new(RwLock::new(map)),
        }
    }

    /// Insert or replace an account
    pub async fn insert(&self, account: Account) {
        self.accounts.write().await.insert(account.id(), account);
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn get(&self, id: AccountId) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_existing() {
        let repo = InMemoryAccountRepository::with_accounts(vec![Account::new(
            AccountId::new(7),
            "acc-7",
            "Acme",
        )]);

        let account = repo.get(AccountId::new(7)).await.unwrap();
        assert_eq!(account.unwrap().name(), "Acme");
    }

    #[tokio::test]
    async fn test_get_missing() {
        let repo = InMemoryAccountRepository::new();
        assert!(repo.get(AccountId::new(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_replaces() {
        let repo = InMemoryAccountRepository::new();
        repo.insert(Account::new(AccountId::new(1), "a", "First")).await;
        repo.insert(Account::new(AccountId::new(1), "a", "Renamed")).await;

        let account = repo.get(AccountId::new(1)).await.unwrap().unwrap();
        assert_eq!(account.name(), "Renamed");
    }

    #[tokio::test]
    async fn test_ping_default() {
        assert!(InMemoryAccountRepository::new().ping().await.is_ok());
    }
}
