use quill_core::enums::{Priority, TaskStatus};
use quill_core::errors::CoreError;
use quill_db::updates::task::{TaskUpdate, TaskUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::commands::shared::identity::require_identity;
use crate::commands::shared::lookup::task_lookup_error;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due: Option<String>,
    pub clear_due: bool,
    pub priority: Option<String>,
    pub status: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let update = build_update(&params)?;
    let owner = require_identity(ctx)?;
    let task = ctx
        .service
        .update_task(&owner.user_id, &params.id, update)
        .await
        .map_err(|error| task_lookup_error(error, &params.id))?;
    output(&task, flags.format)
}

fn build_update(params: &Params) -> anyhow::Result<TaskUpdate> {
    let mut builder = TaskUpdateBuilder::new();
    if let Some(title) = params.title.as_deref() {
        builder = builder.title(title);
    }
    if let Some(description) = params.description.as_deref() {
        builder = builder.description(description);
    }
    if params.clear_due {
        builder = builder.due_date(None);
    } else if let Some(due) = params.due.as_deref() {
        builder = builder.due_date(Some(parse_date(due, "due")?));
    }
    if let Some(priority) = params.priority.as_deref() {
        builder = builder.priority(parse_enum::<Priority>(priority, "priority")?);
    }
    if let Some(status) = params.status.as_deref() {
        builder = builder.status(parse_enum::<TaskStatus>(status, "status")?);
    }

    let update = builder.build();
    if update.is_empty() {
        return Err(CoreError::Validation(
            "nothing to update: pass --title, --description, --due, --clear-due, --priority \
             or --status"
                .into(),
        )
        .into());
    }
    Ok(update)
}
