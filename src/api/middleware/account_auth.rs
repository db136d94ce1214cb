//! Account resolution from session tokens

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::Account;

/// Extractor resolving the acting account from `Authorization: Bearer <jwt>`
#[derive(Debug, Clone)]
pub struct RequireAccount(pub Account);

impl FromRequestParts<AppState> for RequireAccount {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        let claims = state
            .jwt_service
            .validate(&token)
            .map_err(|_| ApiError::unauthorized("Invalid or expired session token"))?;

        debug!(user_id = claims.sub, account_id = claims.account_id, "Resolving session account");

        let account = state
            .account_repository
            .get(claims.account_id())
            .await
            .map_err(ApiError::from)?
            .ok_or_else(|| ApiError::unauthorized("Account not found"))?;

        Ok(RequireAccount(account))
    }
}

/// Extract the bearer token from the Authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

    let value = value
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header encoding"))?;

    match value.strip_prefix("Bearer ").map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(ApiError::unauthorized(
            "Provide a session token via 'Authorization: Bearer <token>'",
        )),
    }
}
