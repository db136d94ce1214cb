//! Team view response payload

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Account, Invitation, TeamView, User};

/// Canonical timestamp text: RFC 3339, UTC, millisecond precision
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `GET /v1/team` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamResponse {
    pub data: TeamData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamData {
    pub account: ApiAccount,
    pub users: Vec<ApiUser>,
    #[serde(rename = "invitedUsers")]
    pub invited_users: Vec<ApiInvitation>,
    #[serde(rename = "isAdminTeam")]
    pub is_admin_team: bool,
}

/// Account as exposed to API clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiAccount {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    pub is_capped: bool,
    pub found_us: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Public user record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiUser {
    pub id: i64,
    #[serde(rename = "accountId")]
    pub account_id: i64,
    pub email: String,
    pub name: String,
    pub role: String,
    pub uuid: String,
    pub email_verified: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Pending invitation as exposed to API clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInvitation {
    pub id: i64,
    pub account_id: i64,
    pub email: String,
    pub name: String,
    pub role: String,
    pub invited_by: i64,
    pub expires_at: String,
    pub accepted: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Account> for ApiAccount {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id().value(),
            uuid: account.uuid().to_string(),
            name: account.name().to_string(),
            is_capped: account.is_capped(),
            found_us: account.found_us().map(str::to_string),
            created_at: format_timestamp(account.created_at()),
            updated_at: format_timestamp(account.updated_at()),
        }
    }
}

/// Convert a user to its public representation
pub fn user_to_api(user: &User) -> ApiUser {
    ApiUser {
        id: user.id().value(),
        account_id: user.account_id().value(),
        email: user.email().to_string(),
        name: user.name().to_string(),
        role: user.role().as_str().to_string(),
        uuid: user.uuid().to_string(),
        email_verified: user.email_verified(),
        created_at: format_timestamp(user.created_at()),
        updated_at: format_timestamp(user.updated_at()),
    }
}

impl ApiInvitation {
    /// Invitations are stamped with the owning account's timestamps, not their own
    fn stamped(invitation: &Invitation, account: &Account) -> Self {
        Self {
            id: invitation.id().value(),
            account_id: invitation.account_id().value(),
            email: invitation.email().to_string(),
            name: invitation.name().to_string(),
            role: invitation.role().as_str().to_string(),
            invited_by: invitation.invited_by().value(),
            expires_at: format_timestamp(invitation.expires_at()),
            accepted: invitation.accepted(),
            created_at: format_timestamp(account.created_at()),
            updated_at: format_timestamp(account.updated_at()),
        }
    }
}

impl From<&TeamView> for TeamData {
    fn from(view: &TeamView) -> Self {
        let account = view.account();

        Self {
            account: ApiAccount::from(account),
            users: view.users().iter().map(user_to_api).collect(),
            invited_users: view
                .invitations()
                .iter()
                .map(|i| ApiInvitation::stamped(i, account))
                .collect(),
            is_admin_team: view.is_admin_team(),
        }
    }
}

impl From<&TeamView> for TeamResponse {
    fn from(view: &TeamView) -> Self {
        Self {
            data: TeamData::from(view),
        }
    }
}
