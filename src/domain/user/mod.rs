//! User domain
//!
//! Users are the active members of an account.

mod entity;
mod repository;

pub use entity::{User, UserId, UserRole};
pub use repository::UserRepository;

#[cfg(test)]
pub use repository::MockUserRepository;
