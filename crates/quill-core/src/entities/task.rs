use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::TaskDraft;
use crate::enums::{Priority, TaskStatus};

/// A persisted task, owned by exactly one user.
///
/// Subtasks carry `parent_task_id`; nesting is one level deep.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub user_id: String,
    pub parent_task_id: Option<String>,
    pub is_subtask: bool,
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a `TaskStore`. The store assigns id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewTask {
    pub user_id: String,
    pub parent_task_id: Option<String>,
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub status: TaskStatus,
}

impl NewTask {
    /// A top-level task built from a submitted draft.
    #[must_use]
    pub fn primary(user_id: impl Into<String>, draft: &TaskDraft) -> Self {
        Self {
            user_id: user_id.into(),
            parent_task_id: None,
            title: draft.title.clone(),
            description: draft.description.clone(),
            due_date: draft.due_date,
            priority: draft.priority,
            status: draft.status,
        }
    }

    /// A pending subtask linked to `parent_task_id`.
    #[must_use]
    pub fn subtask(
        user_id: impl Into<String>,
        parent_task_id: impl Into<String>,
        title: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            parent_task_id: Some(parent_task_id.into()),
            title: title.into(),
            description: String::new(),
            due_date: None,
            priority,
            status: TaskStatus::Pending,
        }
    }

    #[must_use]
    pub const fn is_subtask(&self) -> bool {
        self.parent_task_id.is_some()
    }
}
