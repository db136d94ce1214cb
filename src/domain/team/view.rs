//! Team view aggregate

use crate::domain::account::{Account, AdminTeam};
use crate::domain::invitation::Invitation;
use crate::domain::user::User;
use crate::domain::DomainError;

/// Account snapshot plus its members and pending invitations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamView {
    account: Account,
    users: Vec<User>,
    invitations: Vec<Invitation>,
    is_admin_team: bool,
}

impl TeamView {
    /// Merge the two record sets with the account and classify the tenant.
    ///
    /// Collection order is preserved as given. Every record must belong to
    /// `account`; a stray record fails the whole view.
    pub fn assemble(
        account: Account,
        users: Vec<User>,
        invitations: Vec<Invitation>,
        admin: &AdminTeam,
    ) -> Result<Self, DomainError> {
        let account_id = account.id();

        if let Some(user) = users.iter().find(|u| u.account_id() != account_id) {
            return Err(DomainError::internal(format!(
                "User '{}' belongs to account '{}', expected '{}'",
                user.id(),
                user.account_id(),
                account_id
            )));
        }

        if let Some(invitation) = invitations.iter().find(|i| i.account_id() != account_id) {
            return Err(DomainError::internal(format!(
                "Invitation '{}' belongs to account '{}', expected '{}'",
                invitation.id().value(),
                invitation.account_id(),
                account_id
            )));
        }

        let is_admin_team = admin.is_admin(account.uuid());

        Ok(Self {
            account,
            users,
            invitations,
            is_admin_team,
        })
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn invitations(&self) -> &[Invitation] {
        &self.invitations
    }

    pub fn is_admin_team(&self) -> bool {
        self.is_admin_team
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::AccountId;
    use crate::domain::invitation::InvitationId;
    use crate::domain::user::UserId;

    const ADMIN_UUID: &str = "9f1c2d3e-4b5a-4c6d-8e7f-0a1b2c3d4e5f";

    fn account(uuid: &str) -> Account {
        Account::new(AccountId::new(7), uuid, "Acme")
    }

    fn user(id: i64, account_id: i64) -> User {
        User::new(
            UserId::new(id),
            AccountId::new(account_id),
            format!("user{}@example.com", id),
            format!("User {}", id),
        )
    }

    fn invitation(id: i64, account_id: i64) -> Invitation {
        Invitation::new(
            InvitationId::new(id),
            AccountId::new(account_id),
            format!("invitee{}@example.com", id),
            format!("Invitee {}", id),
            UserId::new(1),
        )
    }

    #[test]
    fn test_assemble_keeps_counts_and_order() {
        let view = TeamView::assemble(
            account("11111111-1111-1111-1111-111111111111"),
            vec![user(2, 7), user(1, 7)],
            vec![invitation(5, 7)],
            &AdminTeam::new(ADMIN_UUID),
        )
        .unwrap();

        assert_eq!(view.users().len(), 2);
        assert_eq!(view.users()[0].id(), UserId::new(2));
        assert_eq!(view.users()[1].id(), UserId::new(1));
        assert_eq!(view.invitations().len(), 1);
        assert!(!view.is_admin_team());
    }

    #[test]
    fn test_assemble_admin_account() {
        let view =
            TeamView::assemble(account(ADMIN_UUID), vec![], vec![], &AdminTeam::new(ADMIN_UUID))
                .unwrap();

        assert!(view.is_admin_team());
        assert!(view.users().is_empty());
        assert!(view.invitations().is_empty());
    }

    #[test]
    fn test_assemble_rejects_foreign_user() {
        let result = TeamView::assemble(
            account("u"),
            vec![user(1, 7), user(2, 8)],
            vec![],
            &AdminTeam::new(ADMIN_UUID),
        );

        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }

    #[test]
    fn test_assemble_rejects_foreign_invitation() {
        let result = TeamView::assemble(
            account("u"),
            vec![],
            vec![invitation(1, 9)],
            &AdminTeam::new(ADMIN_UUID),
        );

        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }
}
