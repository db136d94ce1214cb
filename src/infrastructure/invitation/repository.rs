//! In-memory invitation repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::invitation::{Invitation, InvitationId, InvitationQuery, InvitationRepository};
use crate::domain::DomainError;

/// In-memory implementation of InvitationRepository
#[derive(Debug, Default)]
pub struct InMemoryInvitationRepository {
    invitations: Arc<RwLock<BTreeMap<InvitationId, Invitation>>>,
}

impl InMemoryInvitationRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial invitations
    pub fn with_invitations(invitations: Vec<Invitation>) -> Self {
        let map = invitations.into_iter().map(|i| (i.id(), i)).collect();

        Self {
            invitations: Arc::new(RwLock::new(map)),
        }
    }

    /// Insert or replace an invitation
    pub async fn insert(&self, invitation: Invitation) {
        self.invitations.write().await.insert(invitation.id(), invitation);
    }
}

#[async_trait]
impl InvitationRepository for InMemoryInvitationRepository {
    async fn list_pending(&self, query: &InvitationQuery) -> Result<Vec<Invitation>, DomainError> {
        let now = query.reference_time();
        let invitations = self.invitations.read().await;

        Ok(invitations
            .values()
            .filter(|i| i.account_id() == query.account_id && i.is_pending_at(now))
            .cloned()
            .collect())
    }
}
