use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    title: &str,
    description: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let suggestions = ctx
        .intake()
        .request_suggestions(title, description, ctx.identity.as_ref())
        .await?;
    output(&suggestions, flags.format)
}
