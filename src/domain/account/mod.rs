//! Account domain module
//!
//! Accounts are tenants. Every user and every pending invitation belongs to
//! exactly one account.

mod admin;
mod entity;
mod repository;

pub use admin::AdminTeam;
pub use entity::{Account, AccountId};
pub use repository::AccountRepository;

#[cfg(test)]
pub use repository::MockAccountRepository;
