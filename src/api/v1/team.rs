//! Team view endpoint

use axum::{extract::State, Json};
use tracing::debug;

use crate::api::middleware::RequireAccount;
use crate::api::state::AppState;
use crate::api::types::{ApiError, EnvQuery, TeamResponse};

/// GET /v1/team
///
/// The acting account's profile, active members and pending invitations.
pub async fn get_team(
    State(state): State<AppState>,
    RequireAccount(account): RequireAccount,
    query: EnvQuery,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(account_id = %account.id(), env = ?query.env, "Getting team view");

    let view = state
        .team_view_service
        .get_team_view(&account)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(TeamResponse::from(&view)))
}
