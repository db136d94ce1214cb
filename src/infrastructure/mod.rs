//! Infrastructure layer - Storage, authentication and observability implementations

pub mod account;
pub mod auth;
pub mod invitation;
pub mod logging;
pub mod observability;
pub mod storage;
pub mod team;
pub mod user;
