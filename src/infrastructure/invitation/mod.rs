//! Invitation infrastructure implementations

mod postgres_repository;
mod repository;

pub use postgres_repository::PostgresInvitationRepository;
pub use repository::InMemoryInvitationRepository;
