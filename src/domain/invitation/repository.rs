//! Invitation repository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;

use super::entity::Invitation;
use crate::domain::account::AccountId;
use crate::domain::DomainError;

/// Query parameters for listing pending invitations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvitationQuery {
    /// Account the invitations are scoped to
    pub account_id: AccountId,
    /// Reference time for expiry; the current time when unset
    pub as_of: Option<DateTime<Utc>>,
}

impl InvitationQuery {
    pub fn for_account(account_id: AccountId) -> Self {
        Self {
            account_id,
            as_of: None,
        }
    }

    pub fn as_of(mut self, at: DateTime<Utc>) -> Self {
        self.as_of = Some(at);
        self
    }

    /// The instant pending status is evaluated against
    pub fn reference_time(&self) -> DateTime<Utc> {
        self.as_of.unwrap_or_else(Utc::now)
    }
}

/// Read access to pending invitations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InvitationRepository: Send + Sync {
    /// List the pending invitations of an account, ordered by ID
    async fn list_pending(&self, query: &InvitationQuery) -> Result<Vec<Invitation>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_query_defaults_to_now() {
        let before = Utc::now();
        let query = InvitationQuery::for_account(AccountId::new(1));

        assert!(query.as_of.is_none());
        assert!(query.reference_time() >= before);
    }

    #[test]
    fn test_query_as_of() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let query = InvitationQuery::for_account(AccountId::new(1)).as_of(at);

        assert_eq!(query.reference_time(), at);
    }
}
