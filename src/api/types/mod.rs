//! API wire types
//!
//! Error envelope, query validation and the team view payload.

pub mod error;
pub mod query;
pub mod team;

pub use error::{ApiError, ApiErrorCode, ApiErrorResponse};
pub use query::{require_empty_query, EnvQuery, FieldError, QueryOptions};
pub use team::{format_timestamp, user_to_api, ApiAccount, ApiInvitation, ApiUser, TeamData, TeamResponse};
