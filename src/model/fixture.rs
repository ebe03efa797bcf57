//! The fixed baseline dataset the e2e suite expects.

use serde::Serialize;

/// Natural keys and fixed values of the fixture.
///
/// Identifiers are fixed strings rather than generated ones so tests can refer to them
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fixture {
    pub account_id: String,
    pub email: String,
    pub password: String,
    pub workspace_id: String,
    pub workspace_name: String,
    pub base_id: String,
    pub base_name: String,
    pub base_order: f64,
}

impl Fixture {
    /// Display name for the fixture account: the local part of its email address.
    ///
    /// An address without `@` is used whole.
    pub fn display_name(&self) -> &str {
        self.email
            .split_once('@')
            .map_or(self.email.as_str(), |(local, _)| local)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self {
            account_id: "usrTestUserId".to_string(),
            email: "test@e2e.com".to_string(),
            password: "12345678".to_string(),
            workspace_id: "spcTestSpaceId".to_string(),
            workspace_name: "test space".to_string(),
            base_id: "bseTestBaseId".to_string(),
            base_name: "test base".to_string(),
            base_order: 1.0,
        }
    }
}

/// Salt and hash pair produced by the password-hash collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordCredentials {
    pub salt: String,
    pub hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_is_email_local_part() {
        let fixture = Fixture::default();

        assert_eq!(fixture.display_name(), "test");
    }

    #[test]
    fn display_name_without_at_sign_uses_whole_address() {
        let fixture = Fixture {
            email: "local-only".to_string(),
            ..Fixture::default()
        };

        assert_eq!(fixture.display_name(), "local-only");
    }
}
