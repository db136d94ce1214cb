//! Domain layer - Core entities, aggregates and repository traits

pub mod account;
pub mod error;
pub mod invitation;
pub mod team;
pub mod user;

pub use account::{Account, AccountId, AccountRepository, AdminTeam};
pub use error::DomainError;
pub use invitation::{Invitation, InvitationId, InvitationQuery, InvitationRepository};
pub use team::TeamView;
pub use user::{User, UserId, UserRepository, UserRole};
