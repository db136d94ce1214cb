//! Team view service
//!
//! Fetches the members and pending invitations of an account concurrently and
//! assembles them into a [`TeamView`].

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::domain::account::{Account, AdminTeam};
use crate::domain::invitation::{InvitationQuery, InvitationRepository};
use crate::domain::team::TeamView;
use crate::domain::user::UserRepository;
use crate::domain::DomainError;
use crate::infrastructure::observability::{record_team_view, TeamViewOutcome};

/// Team view service
pub struct TeamViewService {
    users: Arc<dyn UserRepository>,
    invitations: Arc<dyn InvitationRepository>,
    admin: AdminTeam,
}

impl std::fmt::Debug for TeamViewService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamViewService")
            .field("admin", &self.admin)
            .finish_non_exhaustive()
    }
}

impl TeamViewService {
    /// Create a new team view service
    pub fn new(
        users: Arc<dyn UserRepository>,
        invitations: Arc<dyn InvitationRepository>,
        admin: AdminTeam,
    ) -> Self {
        Self {
            users,
            invitations,
            admin,
        }
    }

    pub fn admin(&self) -> &AdminTeam {
        &self.admin
    }

    /// Build the team view of an account.
    ///
    /// Both lookups run concurrently; the first failure aborts the view.
    pub async fn get_team_view(&self, account: &Account) -> Result<TeamView, DomainError> {
        let started = Instant::now();
        let account_id = account.id();
        let query = InvitationQuery::for_account(account_id);

        let fetched = futures::try_join!(
            self.users.list_active_by_account(account_id),
            self.invitations.list_pending(&query),
        );

        let result = fetched.and_then(|(users, invitations)| {
            debug!(
                account_id = %account_id,
                users = users.len(),
                invitations = invitations.len(),
                "Fetched team members"
            );

            TeamView::assemble(account.clone(), users, invitations, &self.admin)
        });

        let outcome = match &result {
            Ok(_) => TeamViewOutcome::Success,
            Err(e) => {
                warn!(account_id = %account_id, error = %e, "Failed to assemble team view");
                TeamViewOutcome::Error
            }
        };
        record_team_view(outcome, started.elapsed());

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::AccountId;
    use crate::domain::invitation::{Invitation, InvitationId, MockInvitationRepository};
    use crate::domain::user::{MockUserRepository, User, UserId};
    use crate::infrastructure::invitation::InMemoryInvitationRepository;
    use crate::infrastructure::user::InMemoryUserRepository;

    const ADMIN_UUID: &str = "0b3a6d0c-3f2e-4c56-9a57-4e8b7c1d2e3f";

    fn account(uuid: &str) -> Account {
        Account::new(AccountId::new(7), uuid, "Acme")
    }

    fn user(id: i64, account: i64) -> User {
        User::new(
            UserId::new(id),
            AccountId::new(account),
            format!("user{}@example.com", id),
            format!("User {}", id),
        )
    }

    fn invitation(id: i64, account: i64) -> Invitation {
        Invitation::new(
            InvitationId::new(id),
            AccountId::new(account),
            format!("invitee{}@example.com", id),
            format!("Invitee {}", id),
            UserId::new(1),
        )
    }

    fn in_memory_service() -> TeamViewService {
        let users = InMemoryUserRepository::with_users(vec![user(1, 7), user(2, 7), user(3, 8)]);
        let invitations =
            InMemoryInvitationRepository::with_invitations(vec![invitation(1, 7), invitation(2, 8)]);

        TeamViewService::new(
            Arc::new(users),
            Arc::new(invitations),
            AdminTeam::new(ADMIN_UUID),
        )
    }

    #[tokio::test]
    async fn test_get_team_view() {
        let service = in_memory_service();

        let view = service.get_team_view(&account("other")).await.unwrap();

        assert_eq!(view.users().len(), 2);
        assert_eq!(view.invitations().len(), 1);
        assert!(!view.is_admin_team());
    }

    #[tokio::test]
    async fn test_get_team_view_admin() {
        let service = in_memory_service();

        let view = service.get_team_view(&account(ADMIN_UUID)).await.unwrap();
        assert!(view.is_admin_team());
    }

    #[tokio::test]
    async fn test_queries_scoped_to_account() {
        let mut users = MockUserRepository::new();
        users
            .expect_list_active_by_account()
            .withf(|id| id.value() == 7)
            .times(1)
            .returning(|_| Ok(vec![]));

        let mut invitations = MockInvitationRepository::new();
        invitations
            .expect_list_pending()
            .withf(|q| q.account_id.value() == 7 && q.as_of.is_none())
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = TeamViewService::new(
            Arc::new(users),
            Arc::new(invitations),
            AdminTeam::new(ADMIN_UUID),
        );

        let view = service.get_team_view(&account("x")).await.unwrap();
        assert!(view.users().is_empty());
        assert!(view.invitations().is_empty());
    }

    #[tokio::test]
    async fn test_user_lookup_failure_fails_view() {
        let mut users = MockUserRepository::new();
        users
            .expect_list_active_by_account()
            .returning(|_| Err(DomainError::storage("connection reset")));

        let mut invitations = MockInvitationRepository::new();
        invitations
            .expect_list_pending()
            .returning(|_| Ok(vec![invitation(1, 7)]));

        let service = TeamViewService::new(
            Arc::new(users),
            Arc::new(invitations),
            AdminTeam::new(ADMIN_UUID),
        );

        let err = service.get_team_view(&account("x")).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage { .. }));
    }

    #[tokio::test]
    async fn test_invitation_lookup_failure_fails_view() {
        let mut users = MockUserRepository::new();
        users
            .expect_list_active_by_account()
            .returning(|_| Ok(vec![user(1, 7)]));

        let mut invitations = MockInvitationRepository::new();
        invitations
            .expect_list_pending()
            .returning(|_| Err(DomainError::storage("timeout")));

        let service = TeamViewService::new(
            Arc::new(users),
            Arc::new(invitations),
            AdminTeam::new(ADMIN_UUID),
        );

        let err = service.get_team_view(&account("x")).await.unwrap_err();
        assert!(err.is_server_fault());
    }

    #[tokio::test]
    async fn test_foreign_record_fails_view() {
        let mut users = MockUserRepository::new();
        users
            .expect_list_active_by_account()
            .returning(|_| Ok(vec![user(1, 99)]));

        let mut invitations = MockInvitationRepository::new();
        invitations.expect_list_pending().returning(|_| Ok(vec![]));

        let service = TeamViewService::new(
            Arc::new(users),
            Arc::new(invitations),
            AdminTeam::new(ADMIN_UUID),
        );

        let err = service.get_team_view(&account("x")).await.unwrap_err();
        assert!(matches!(err, DomainError::Internal { .. }));
    }
}
