//! Storage infrastructure - backend selection, PostgreSQL pooling and fixtures

mod backend;
mod postgres;
mod seed;

pub use backend::StorageType;
pub use postgres::{connect, ensure_schema, PostgresConfig};
pub use seed::SeedData;
