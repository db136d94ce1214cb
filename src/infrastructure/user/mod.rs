//! User infrastructure implementations

mod postgres_repository;
mod repository;

pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
