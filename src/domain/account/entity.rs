//! Account entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Numeric account identifier, used as the foreign key of users and invitations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account (tenant) entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Internal identifier
    id: AccountId,
    /// External-facing identifier. Immutable, compared byte-for-byte.
    uuid: String,
    /// Display name
    name: String,
    /// Whether the account runs on a capped plan
    #[serde(default)]
    is_capped: bool,
    /// Acquisition channel captured at signup
    #[serde(default)]
    found_us: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account stamped with the current time
    pub fn new(id: AccountId, uuid: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            id,
            uuid: uuid.into(),
            name: name.into(),
            is_capped: false,
            found_us: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set explicit timestamps (builder pattern)
    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    pub fn with_capped(mut self, is_capped: bool) -> Self {
        self.is_capped = is_capped;
        self
    }

    pub fn with_found_us(mut self, found_us: impl Into<String>) -> Self {
        self.found_us = Some(found_us.into());
        self
    }

    // Getters

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_capped(&self) -> bool {
        self.is_capped
    }

    pub fn found_us(&self) -> Option<&str> {
        self.found_us.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_account_creation() {
        let account = Account::new(AccountId::new(7), "acc-uuid", "Acme");

        assert_eq!(account.id().value(), 7);
        assert_eq!(account.uuid(), "acc-uuid");
        assert_eq!(account.name(), "Acme");
        assert!(!account.is_capped());
        assert!(account.found_us().is_none());
        assert_eq!(account.created_at(), account.updated_at());
    }

    #[test]
    fn test_account_with_timestamps() {
        let t0 = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2023, 6, 1, 12, 30, 0).unwrap();
        let account = Account::new(AccountId::new(1), "u", "n").with_timestamps(t0, t1);

        assert_eq!(account.created_at(), t0);
        assert_eq!(account.updated_at(), t1);
    }

    #[test]
    fn test_account_deserialization_defaults() {
        let json = r#"{
            "id": 3,
            "uuid": "3b9e0c38-7c55-4e7d-a3a8-8d1c1b0f8f35",
            "name": "Globex",
            "created_at": "2024-01-02T03:04:05Z",
            "updated_at": "2024-01-03T03:04:05Z"
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.id(), AccountId::new(3));
        assert!(!account.is_capped());
        assert!(account.found_us().is_none());
    }

    #[test]
    fn test_account_id_display() {
        assert_eq!(AccountId::from(42).to_string(), "42");
    }
}
