//! Application state for shared services

use std::sync::Arc;

use crate::domain::{Account, AccountRepository, DomainError, TeamView};
use crate::infrastructure::auth::JwtService;
use crate::infrastructure::team::TeamViewService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub account_repository: Arc<dyn AccountRepository>,
    pub team_view_service: Arc<dyn TeamViewServiceTrait>,
    pub jwt_service: Arc<JwtService>,
}

impl AppState {
    pub fn new(
        account_repository: Arc<dyn AccountRepository>,
        team_view_service: Arc<dyn TeamViewServiceTrait>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            account_repository,
            team_view_service,
            jwt_service,
        }
    }
}

/// Trait for team view operations
#[async_trait::async_trait]
pub trait TeamViewServiceTrait: Send + Sync {
    async fn get_team_view(&self, account: &Account) -> Result<TeamView, DomainError>;
}

#[async_trait::async_trait]
impl TeamViewServiceTrait for TeamViewService {
    async fn get_team_view(&self, account: &Account) -> Result<TeamView, DomainError> {
        TeamViewService::get_team_view(self, account).await
    }
}
