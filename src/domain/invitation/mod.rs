//! Invitation domain
//!
//! An invitation is a pending membership request scoped to one account. It is
//! consumed when accepted (becoming a user) or removed when revoked.

mod entity;
mod repository;

pub use entity::{Invitation, InvitationId};
pub use repository::{InvitationQuery, InvitationRepository};

#[cfg(test)]
pub use repository::MockInvitationRepository;
