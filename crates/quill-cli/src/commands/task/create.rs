use quill_core::entities::TaskDraft;
use quill_core::enums::{Priority, TaskStatus};
use quill_core::responses::CommitResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CreateArgs;
use crate::commands::shared::identity::require_identity;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::commands::shared::selection::resolve_selection;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &CreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let intake = ctx.intake();
    let draft = build_draft(args, |text| intake.apply_parsed_draft(text))?;

    let suggestions = if args.suggest {
        intake
            .request_suggestions(&draft.title, non_empty(&draft.description), ctx.identity.as_ref())
            .await?
    } else {
        Vec::new()
    };
    let selected = resolve_selection(args.select.as_deref(), args.no_subtasks, &suggestions)?;

    let outcome = intake
        .commit(&draft, ctx.identity.as_ref(), &selected, &suggestions)
        .await?;

    let owner = require_identity(ctx)?;
    let task = ctx.service.get_task(&owner.user_id, &outcome.task_id).await?;
    let subtasks = ctx
        .service
        .list_subtasks(&owner.user_id, &outcome.task_id)
        .await?;
    let skipped = selected.len().saturating_sub(outcome.subtask_ids.len());

    output(
        &CommitResponse {
            task,
            subtasks,
            skipped_subtasks: u32::try_from(skipped)?,
        },
        flags.format,
    )
}

/// Parse `--text` into a fresh draft, then apply explicit flags on top.
fn build_draft(
    args: &CreateArgs,
    parse: impl Fn(&str) -> quill_core::entities::ParsedTask,
) -> anyhow::Result<TaskDraft> {
    let mut draft = TaskDraft::default();
    if let Some(text) = args.text.as_deref() {
        draft.apply_parsed(parse(text));
    }
    if let Some(title) = args.title.as_deref() {
        draft.title = title.trim().to_string();
    }
    if let Some(description) = args.description.as_deref() {
        draft.description = description.to_string();
    }
    if let Some(due) = args.due.as_deref() {
        draft.due_date = Some(parse_date(due, "due")?);
    }
    if let Some(priority) = args.priority.as_deref() {
        draft.priority = parse_enum::<Priority>(priority, "priority")?;
    }
    if let Some(status) = args.status.as_deref() {
        draft.status = parse_enum::<TaskStatus>(status, "status")?;
    }
    Ok(draft)
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.trim().is_empty()).then_some(value)
}
