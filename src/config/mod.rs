//! Application configuration

mod app_config;

pub use app_config::{
    AdminConfig, AppConfig, AuthConfig, LogFormat, LoggingConfig, ServerConfig, StorageConfig,
    DEFAULT_ADMIN_TEAM_UUID,
};
