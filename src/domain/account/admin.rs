//! Administrative tenant classification

/// The single account granted internal status, identified by its UUID.
///
/// Loaded once from configuration at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminTeam {
    uuid: String,
}

impl AdminTeam {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self { uuid: uuid.into() }
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Exact, case-sensitive comparison against the account's UUID
    pub fn is_admin(&self, account_uuid: &str) -> bool {
        self.uuid == account_uuid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN_UUID: &str = "0b3a6d0c-3f2e-4c56-9a57-4e8b7c1d2e3f";

    #[test]
    fn test_exact_match_is_admin() {
        let admin = AdminTeam::new(ADMIN_UUID);
        assert!(admin.is_admin(ADMIN_UUID));
    }

    #[test]
    fn test_other_uuid_is_not_admin() {
        let admin = AdminTeam::new(ADMIN_UUID);
        assert!(!admin.is_admin("11111111-1111-1111-1111-111111111111"));
        assert!(!admin.is_admin(""));
    }

    #[test]
    fn test_near_misses_are_not_admin() {
        let admin = AdminTeam::new(ADMIN_UUID);

        assert!(!admin.is_admin(&ADMIN_UUID.to_uppercase()));
        assert!(!admin.is_admin(&format!("{} ", ADMIN_UUID)));
        assert!(!admin.is_admin(&format!(" {}", ADMIN_UUID)));
        assert!(!admin.is_admin(&ADMIN_UUID[..ADMIN_UUID.len() - 1]));
    }
}
