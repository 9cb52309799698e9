use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Authenticated user identity, passed explicitly to every write.
///
/// Produced by the surrounding application (configuration or a CLI flag) and
/// treated as an opaque owner reference. There is no role model: owning a
/// task is the only authorization check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuthIdentity {
    /// Stable subject identifier of the signed-in user.
    pub user_id: String,
    pub email: Option<String>,
}

impl AuthIdentity {
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
        }
    }
}
