use crate::cli::GlobalFlags;
use crate::commands::shared::identity::require_identity;
use crate::commands::shared::lookup::task_lookup_error;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let owner = require_identity(ctx)?;
    let task = ctx
        .service
        .complete_task(&owner.user_id, id)
        .await
        .map_err(|error| task_lookup_error(error, id))?;
    output(&task, flags.format)
}
