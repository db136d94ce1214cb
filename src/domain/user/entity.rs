//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::account::AccountId;

/// Numeric user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of a member within its account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full control over the account
    #[default]
    Administrator,
    /// Read access to production, limited write access
    ProductionSupport,
    /// Full access to non-production environments
    DevelopmentFullAccess,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::ProductionSupport => "production_support",
            Self::DevelopmentFullAccess => "development_full_access",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "administrator" => Some(Self::Administrator),
            "production_support" => Some(Self::ProductionSupport),
            "development_full_access" => Some(Self::DevelopmentFullAccess),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    uuid: String,
    /// Owning account
    account_id: AccountId,
    email: String,
    name: String,
    #[serde(default)]
    role: UserRole,
    #[serde(default)]
    email_verified: bool,
    /// Suspended users are no longer active members
    #[serde(default)]
    suspended: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new, active, unverified administrator
    pub fn new(
        id: UserId,
        account_id: AccountId,
        email: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id,
            uuid: Uuid::new_v4().to_string(),
            account_id,
            email: email.into(),
            name: name.into(),
            role: UserRole::default(),
            email_verified: false,
            suspended: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = uuid.into();
        self
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_email_verified(mut self, verified: bool) -> Self {
        self.email_verified = verified;
        self
    }

    pub fn with_suspended(mut self, suspended: bool) -> Self {
        self.suspended = suspended;
        self
    }

    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
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

    pub fn email_verified(&self) -> bool {
        self.email_verified
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Active members are the ones that have not been suspended
    pub fn is_active(&self) -> bool {
        !self.suspended
    }
}
