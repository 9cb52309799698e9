use quill_config::QuillConfig;
use quill_core::identity::AuthIdentity;

use crate::cli::GlobalFlags;

/// `--user` wins over `identity.user_id` from config.
///
/// The config email is kept only when the user id also came from config.
#[must_use]
pub fn resolve_identity(flags: &GlobalFlags, config: &QuillConfig) -> Option<AuthIdentity> {
    match flags.user.as_deref().map(str::trim) {
        Some(user) if !user.is_empty() => Some(AuthIdentity::new(user)),
        _ => config.identity.to_identity(),
    }
}
