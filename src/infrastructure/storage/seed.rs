//! JSON fixtures for populating the in-memory store

use std::path::Path;

use serde::Deserialize;

use crate::domain::{Account, DomainError, Invitation, User};

/// Records loaded into the in-memory repositories at startup
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub invitations: Vec<Invitation>,
}

impl SeedData {
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::configuration(format!("Invalid seed data: {}", e)))
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            DomainError::configuration(format!(
                "Failed to read seed file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }
}
