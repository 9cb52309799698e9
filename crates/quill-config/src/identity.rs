//! Signed-in user for CLI sessions.

use quill_core::identity::AuthIdentity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IdentityConfig {
    /// Owner id stamped on every task this user creates.
    #[serde(default)]
    pub user_id: String,

    #[serde(default)]
    pub email: String,
}

impl IdentityConfig {
    pub fn is_configured(&self) -> bool {
        !self.user_id.trim().is_empty()
    }

    /// The configured identity, if a user id is set.
    pub fn to_identity(&self) -> Option<AuthIdentity> {
        if !self.is_configured() {
            return None;
        }
        Some(AuthIdentity {
            user_id: self.user_id.trim().to_string(),
            email: (!self.email.is_empty()).then(|| self.email.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = IdentityConfig::default();
        assert!(!config.is_configured());
        assert!(config.to_identity().is_none());
    }

    #[test]
    fn configured_identity_carries_email() {
        let config = IdentityConfig {
            user_id: "user_2abc".into(),
            email: "a@example.com".into(),
        };
        let identity = config.to_identity().unwrap();
        assert_eq!(identity.user_id, "user_2abc");
        assert_eq!(identity.email.as_deref(), Some("a@example.com"));
    }

    #[test]
    fn whitespace_user_id_is_not_configured() {
        let config = IdentityConfig {
            user_id: "  ".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }
}
