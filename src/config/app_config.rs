use serde::Deserialize;

use crate::infrastructure::observability::MetricsConfig;

/// UUID of the administrative tenant when none is configured
pub const DEFAULT_ADMIN_TEAM_UUID: &str = "00000000-0000-4000-8000-000000000001";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Session token settings
#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 secret; falls back to `JWT_SECRET`, then a random secret
    #[serde(default)]
    pub jwt_secret: Option<String>,
    #[serde(default = "default_token_expiration_hours")]
    pub token_expiration_hours: u64,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "[hidden]"))
            .field("token_expiration_hours", &self.token_expiration_hours)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// `memory` or `postgres`
    #[serde(default = "default_storage_backend")]
    pub backend: String,
    /// Falls back to `DATABASE_URL`
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// JSON fixture loaded into the in-memory store
    #[serde(default)]
    pub seed_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// UUID of the administrative tenant
    #[serde(default = "default_admin_team_uuid")]
    pub team_uuid: String,
}

fn default_token_expiration_hours() -> u64 {
    24
}

fn default_storage_backend() -> String {
    "memory".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_admin_team_uuid() -> String {
    DEFAULT_ADMIN_TEAM_UUID.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_expiration_hours: default_token_expiration_hours(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_storage_backend(),
            database_url: None,
            max_connections: default_max_connections(),
            seed_path: None,
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            team_uuid: default_admin_team_uuid(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl AuthConfig {
    /// Configured secret, else the `JWT_SECRET` environment variable
    pub fn resolve_secret(&self) -> Option<String> {
        self.jwt_secret
            .clone()
            .or_else(|| std::env::var("JWT_SECRET").ok())
            .filter(|s| !s.is_empty())
    }
}

impl StorageConfig {
    /// Configured URL, else the `DATABASE_URL` environment variable
    pub fn resolve_database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| std::env::var("DATABASE_URL").ok())
            .filter(|s| !s.is_empty())
    }
}
