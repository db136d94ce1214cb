//! Invitation entity

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::account::AccountId;
use crate::domain::user::{UserId, UserRole};

/// How long a freshly issued invitation stays valid
pub const DEFAULT_INVITATION_TTL_DAYS: i64 = 7;

/// Numeric invitation identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvitationId(i64);

impl InvitationId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for InvitationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Invitation entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    id: InvitationId,
    account_id: AccountId,
    email: String,
    name: String,
    #[serde(default)]
    role: UserRole,
    /// Member who issued the invitation
    invited_by: UserId,
    expires_at: DateTime<Utc>,
    #[serde(default)]
    accepted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Invitation {
    /// Create a new invitation expiring after the default TTL
    pub fn new(
        id: InvitationId,
        account_id: AccountId,
        email: impl Into<String>,
        name: impl Into<String>,
        invited_by: UserId,
    ) -> Self {
        let now = Utc::now();

        Self {
            id,
            account_id,
            email: email.into(),
            name: name.into(),
            role: UserRole::default(),
            invited_by,
            expires_at: now + Duration::days(DEFAULT_INVITATION_TTL_DAYS),
            accepted: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub fn with_accepted(mut self, accepted: bool) -> Self {
        self.accepted = accepted;
        self
    }

    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    // Getters

    pub fn id(&self) -> InvitationId {
        self.id
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn invited_by(&self) -> UserId {
        self.invited_by
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn accepted(&self) -> bool {
        self.accepted
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Not yet accepted and not yet expired at `now`
    pub fn is_pending_at(&self, now: DateTime<Utc>) -> bool {
        !self.accepted && self.expires_at > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invitation() -> Invitation {
        Invitation::new(
            InvitationId::new(1),
            AccountId::new(7),
            "grace@example.com",
            "Grace",
            UserId::new(2),
        )
    }

    #[test]
    fn test_new_invitation_is_pending() {
        let inv = invitation();

        assert!(inv.is_pending_at(Utc::now()));
        assert!(!inv.accepted());
        assert_eq!(inv.role(), UserRole::Administrator);
        assert!(inv.expires_at() > inv.created_at());
    }

    #[test]
    fn test_accepted_invitation_is_not_pending() {
        let inv = invitation().with_accepted(true);
        assert!(!inv.is_pending_at(Utc::now()));
    }

    #[test]
    fn test_expired_invitation_is_not_pending() {
        let now = Utc::now();
        let inv = invitation().with_expires_at(now - Duration::minutes(1));
        assert!(!inv.is_pending_at(now));
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let now = Utc::now();
        let inv = invitation().with_expires_at(now);
        assert!(!inv.is_pending_at(now));
    }
}
