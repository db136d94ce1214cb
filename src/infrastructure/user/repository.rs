//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::account::AccountId;
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        let map = users.into_iter().map(|u| (u.id(), u)).collect();

        Self {
            users: Arc::new(RwLock::new(map)),
        }
    }

    /// Insert or replace a user
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id(), user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_active_by_account(&self, account_id: AccountId) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;

        Ok(users
            .values()
            .filter(|u| u.account_id() == account_id && u.is_active())
            .cloned()
            .collect())
    }
}
