use quill_core::responses::DashboardResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::identity::require_identity;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `quill dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let owner = require_identity(ctx)?;
    let limit = effective_limit(None, flags.limit, ctx.config.general.dashboard_limit);
    let upcoming = ctx.service.upcoming_tasks(&owner.user_id, limit).await?;

    output(
        &DashboardResponse {
            user_id: owner.user_id.clone(),
            upcoming,
        },
        flags.format,
    )
}
