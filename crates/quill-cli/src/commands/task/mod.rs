mod complete;
mod create;
mod delete;
mod get;
mod list;
mod parse;
mod suggest;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;

pub use parse::run as run_parse;

/// Handle `quill task`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskCommands::Parse { text, today } => parse::run(text, today.as_deref(), flags),
        TaskCommands::Suggest { title, description } => {
            suggest::run(title, description.as_deref(), ctx, flags).await
        }
        TaskCommands::Create(args) => create::run(args, ctx, flags).await,
        TaskCommands::List {
            status,
            top_level,
            limit,
        } => list::run(status, *top_level, *limit, ctx, flags).await,
        TaskCommands::Get { id } => get::run(id, ctx, flags).await,
        TaskCommands::Update {
            id,
            title,
            description,
            due,
            clear_due,
            priority,
            status,
        } => {
            update::run(
                update::Params {
                    id: id.clone(),
                    title: title.clone(),
                    description: description.clone(),
                    due: due.clone(),
                    clear_due: *clear_due,
                    priority: priority.clone(),
                    status: status.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::Complete { id } => complete::run(id, ctx, flags).await,
        TaskCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}
