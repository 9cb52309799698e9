use quill_core::enums::TaskStatus;
use quill_db::repos::task::TaskFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::identity::require_identity;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    status: &str,
    top_level: bool,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let owner = require_identity(ctx)?;
    let filter = TaskFilter {
        status: parse_status_filter(status)?,
        parent_task_id: None,
        top_level_only: top_level,
        limit: Some(effective_limit(limit, flags.limit, ctx.config.general.default_limit)),
    };
    let tasks = ctx.service.list_tasks(&owner.user_id, &filter).await?;
    output(&tasks, flags.format)
}

/// `all` disables the status filter.
fn parse_status_filter(raw: &str) -> anyhow::Result<Option<TaskStatus>> {
    if raw.trim().eq_ignore_ascii_case("all") {
        Ok(None)
    } else {
        parse_enum(raw, "status").map(Some)
    }
}

#[cfg(test)]
mod tests {
    use quill_core::enums::TaskStatus;

    use super::parse_status_filter;

    #[test]
    fn all_means_no_filter() {
        assert_eq!(parse_status_filter("all").unwrap(), None);
        assert_eq!(parse_status_filter("ALL").unwrap(), None);
    }

    #[test]
    fn named_status_filters() {
        assert_eq!(
            parse_status_filter("completed").unwrap(),
            Some(TaskStatus::Completed)
        );
        assert!(parse_status_filter("done").is_err());
    }
}
