//! Team View API
//!
//! Read-only team aggregate for authenticated accounts:
//! - Account profile with canonical timestamps
//! - Active members and pending invitations, fetched concurrently
//! - Administrative tenant classification
//! - In-memory (optionally seeded) or PostgreSQL storage

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::{AccountRepository, AdminTeam, InvitationRepository, UserRepository};
use infrastructure::{
    account::{InMemoryAccountRepository, PostgresAccountRepository},
    auth::{JwtConfig, JwtService},
    invitation::{InMemoryInvitationRepository, PostgresInvitationRepository},
    storage::{self, PostgresConfig, SeedData, StorageType},
    team::TeamViewService,
    user::{InMemoryUserRepository, PostgresUserRepository},
};
use rand::Rng;
use tracing::{info, warn};

/// Repositories backing the team view
struct Repositories {
    accounts: Arc<dyn AccountRepository>,
    users: Arc<dyn UserRepository>,
    invitations: Arc<dyn InvitationRepository>,
}

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let repositories = create_repositories(config).await?;

    let admin = AdminTeam::new(config.admin.team_uuid.clone());
    info!(admin_team_uuid = %admin.uuid(), "Administrative tenant configured");

    let team_view_service = TeamViewService::new(
        repositories.users,
        repositories.invitations,
        admin,
    );

    Ok(AppState::new(
        repositories.accounts,
        Arc::new(team_view_service),
        Arc::new(create_jwt_service(config)),
    ))
}

async fn create_repositories(config: &AppConfig) -> anyhow::Result<Repositories> {
    let backend = StorageType::from_str(&config.storage.backend).ok_or_else(|| {
        anyhow::anyhow!("Unknown storage backend '{}'", config.storage.backend)
    })?;

    match backend {
        StorageType::InMemory => {
            let seed = match &config.storage.seed_path {
                Some(path) => SeedData::load(path).await?,
                None => SeedData::default(),
            };

            info!(
                accounts = seed.accounts.len(),
                users = seed.users.len(),
                invitations = seed.invitations.len(),
                "Using in-memory storage"
            );

            Ok(Repositories {
                accounts: Arc::new(InMemoryAccountRepository::with_accounts(seed.accounts)),
                users: Arc::new(InMemoryUserRepository::with_users(seed.users)),
                invitations: Arc::new(InMemoryInvitationRepository::with_invitations(
                    seed.invitations,
                )),
            })
        }
        StorageType::Postgres => {
            let url = config.storage.resolve_database_url().ok_or_else(|| {
                anyhow::anyhow!("PostgreSQL storage requires storage.database_url or DATABASE_URL")
            })?;

            if config.storage.seed_path.is_some() {
                warn!("storage.seed_path is ignored with the postgres backend");
            }

            let pg_config =
                PostgresConfig::new(url).with_max_connections(config.storage.max_connections);
            let pool = storage::connect(&pg_config).await?;
            storage::ensure_schema(&pool).await?;

            info!("Using PostgreSQL storage");

            Ok(Repositories {
                accounts: Arc::new(PostgresAccountRepository::new(pool.clone())),
                users: Arc::new(PostgresUserRepository::new(pool.clone())),
                invitations: Arc::new(PostgresInvitationRepository::new(pool)),
            })
        }
    }
}

/// Create JWT service from secret (config, env var, or random)
fn create_jwt_service(config: &AppConfig) -> JwtService {
    let secret = config.auth.resolve_secret().unwrap_or_else(|| {
        warn!(
            "No JWT_SECRET configured. Generating random secret. \
            Session tokens will NOT survive restarts."
        );
        generate_random_secret()
    });

    JwtService::new(JwtConfig::new(secret, config.auth.token_expiration_hours))
}

/// Generate a random JWT secret
fn generate_random_secret() -> String {
    use rand::distributions::Alphanumeric;

    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;
    use crate::domain::{Account, AccountId};

    #[test]
    fn test_random_secret() {
        let a = generate_random_secret();
        let b = generate_random_secret();

        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_create_app_state_in_memory() {
        let state = create_app_state().await.unwrap();

        let account = Account::new(AccountId::new(1), "x", "Empty");
        let view = state.team_view_service.get_team_view(&account).await.unwrap();
        assert!(view.users().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_backend_rejected() {
        let config = AppConfig {
            storage: StorageConfig {
                backend: "cassandra".to_string(),
                ..StorageConfig::default()
            },
            ..AppConfig::default()
        };

        assert!(create_app_state_with_config(&config).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_seed_file_rejected() {
        let config = AppConfig {
            storage: StorageConfig {
                seed_path: Some("/nonexistent/seed.json".to_string()),
                ..StorageConfig::default()
            },
            ..AppConfig::default()
        };

        assert!(create_app_state_with_config(&config).await.is_err());
    }
}
