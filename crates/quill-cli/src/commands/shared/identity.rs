use quill_core::identity::AuthIdentity;

use crate::context::AppContext;

/// The acting user, or an error telling how to set one.
pub fn require_identity(ctx: &AppContext) -> anyhow::Result<&AuthIdentity> {
    ctx.identity.as_ref().ok_or_else(|| {
        anyhow::anyhow!(
            "No user configured. Pass --user or set identity.user_id in .quill/config.toml."
        )
    })
}
