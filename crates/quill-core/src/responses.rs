//! CLI response types returned as JSON by `quill` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Task;

/// Response from `quill task create`.
///
/// `skipped_subtasks` counts selected suggestions whose insert failed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CommitResponse {
    pub task: Task,
    pub subtasks: Vec<Task>,
    pub skipped_subtasks: u32,
}

/// Response from `quill task get`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskDetailResponse {
    pub task: Task,
    pub subtasks: Vec<Task>,
}

/// Response from `quill dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardResponse {
    pub user_id: String,
    pub upcoming: Vec<Task>,
}
