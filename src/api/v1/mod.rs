//! Versioned read API

pub mod team;

use axum::{routing::get, Router};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new().route("/team", get(team::get_team))
}
