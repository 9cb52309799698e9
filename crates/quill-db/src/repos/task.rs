//! Task repository: owner-scoped CRUD, listing, and the dashboard view.

use chrono::{SubsecRound, Utc};

use quill_core::entities::{NewTask, Task};
use quill_core::enums::TaskStatus;
use quill_core::ids::PREFIX_TASK;

use crate::error::DatabaseError;
use crate::helpers::{
    format_date, format_datetime, get_opt_string, parse_datetime, parse_enum, parse_optional_date,
};
use crate::service::TaskService;
use crate::updates::task::TaskUpdate;

const SELECT_COLS: &str = "id, user_id, parent_task_id, title, description, due_date, \
                           priority, status, created_at, updated_at";

/// Undated tasks first, then by due date, creation time, and insertion order.
const LIST_ORDER: &str = "due_date ASC, created_at ASC, rowid ASC";

fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    let parent_task_id = get_opt_string(row, 2)?;
    Ok(Task {
        id: row.get(0)?,
        user_id: row.get(1)?,
        is_subtask: parent_task_id.is_some(),
        parent_task_id,
        title: row.get(3)?,
        description: get_opt_string(row, 4)?.unwrap_or_default(),
        due_date: parse_optional_date(get_opt_string(row, 5)?.as_deref())?,
        priority: parse_enum(&row.get::<String>(6)?)?,
        status: parse_enum(&row.get::<String>(7)?)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

async fn collect_tasks(mut rows: libsql::Rows) -> Result<Vec<Task>, DatabaseError> {
    let mut tasks = Vec::new();
    while let Some(row) = rows.next().await? {
        tasks.push(row_to_task(&row)?);
    }
    Ok(tasks)
}

/// Listing options for [`TaskService::list_tasks`].
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// `None` lists every status.
    pub status: Option<TaskStatus>,
    /// Restrict to children of this task.
    pub parent_task_id: Option<String>,
    /// Exclude subtasks.
    pub top_level_only: bool,
    pub limit: Option<u32>,
}

impl TaskService {
    /// Insert a task and return the stored record.
    ///
    /// A subtask's parent must exist, belong to the same user, and be a
    /// top-level task.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` for a blank title or owner, or an
    /// invalid parent, or a query error from libSQL.
    pub async fn create_task(&self, new: &NewTask) -> Result<Task, DatabaseError> {
        if new.title.trim().is_empty() {
            return Err(DatabaseError::InvalidState(
                "task title must not be empty".to_string(),
            ));
        }

        if new.user_id.trim().is_empty() {
            return Err(DatabaseError::InvalidState(
                "task owner must not be empty".to_string(),
            ));
        }

        if let Some(parent_id) = new.parent_task_id.as_deref() {
            let parent = match self.get_task(&new.user_id, parent_id).await {
                Ok(parent) => parent,
                Err(DatabaseError::NoResult) => {
                    return Err(DatabaseError::InvalidState(format!(
                        "parent task {parent_id} not found for user {}",
                        new.user_id
                    )));
                }
                Err(e) => return Err(e),
            };
            if parent.is_subtask {
                return Err(DatabaseError::InvalidState(format!(
                    "parent task {parent_id} is itself a subtask"
                )));
            }
        }

        // Stored timestamps carry microseconds; keep the returned record identical.
        let now = Utc::now().trunc_subsecs(6);
        let id = self.db().generate_id(PREFIX_TASK).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO tasks ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"
                ),
                libsql::params![
                    id.as_str(),
                    new.user_id.as_str(),
                    new.parent_task_id.as_deref(),
                    new.title.as_str(),
                    new.description.as_str(),
                    new.due_date.map(format_date),
                    new.priority.as_str(),
                    new.status.as_str(),
                    format_datetime(now),
                    format_datetime(now)
                ],
            )
            .await?;

        tracing::debug!(
            task_id = %id,
            user_id = %new.user_id,
            subtask = new.is_subtask(),
            "inserted task"
        );

        Ok(Task {
            id,
            user_id: new.user_id.clone(),
            parent_task_id: new.parent_task_id.clone(),
            is_subtask: new.is_subtask(),
            title: new.title.clone(),
            description: new.description.clone(),
            due_date: new.due_date,
            priority: new.priority,
            status: new.status,
            created_at: now,
            updated_at: now,
        })
    }

    /// Fetch one task owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no such task belongs to `owner`.
    pub async fn get_task(&self, owner: &str, id: &str) -> Result<Task, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM tasks WHERE id = ?1 AND user_id = ?2"),
                [id, owner],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_task(&row)
    }

    /// List `owner`'s tasks matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query or row decoding fails.
    pub async fn list_tasks(
        &self,
        owner: &str,
        filter: &TaskFilter,
    ) -> Result<Vec<Task>, DatabaseError> {
        let mut conditions = vec!["user_id = ?1".to_string()];
        let mut params: Vec<libsql::Value> = vec![owner.into()];

        if let Some(status) = filter.status {
            params.push(status.as_str().into());
            conditions.push(format!("status = ?{}", params.len()));
        }
        if let Some(ref parent) = filter.parent_task_id {
            params.push(parent.clone().into());
            conditions.push(format!("parent_task_id = ?{}", params.len()));
        }
        if filter.top_level_only {
            conditions.push("parent_task_id IS NULL".to_string());
        }

        let limit = filter
            .limit
            .map_or_else(String::new, |n| format!(" LIMIT {n}"));
        let sql = format!(
            "SELECT {SELECT_COLS} FROM tasks WHERE {} ORDER BY {LIST_ORDER}{limit}",
            conditions.join(" AND ")
        );

        let rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        collect_tasks(rows).await
    }

    /// Subtasks of `parent_id`, in creation order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query or row decoding fails.
    pub async fn list_subtasks(
        &self,
        owner: &str,
        parent_id: &str,
    ) -> Result<Vec<Task>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM tasks
                     WHERE user_id = ?1 AND parent_task_id = ?2
                     ORDER BY created_at ASC, rowid ASC"
                ),
                [owner, parent_id],
            )
            .await?;
        collect_tasks(rows).await
    }

    /// Pending and in-progress tasks for the dashboard: soonest due date
    /// first, undated last.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query or row decoding fails.
    pub async fn upcoming_tasks(
        &self,
        owner: &str,
        limit: u32,
    ) -> Result<Vec<Task>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM tasks
                     WHERE user_id = ?1 AND status IN (?2, ?3)
                     ORDER BY due_date IS NULL, due_date ASC, created_at ASC, rowid ASC
                     LIMIT {limit}"
                ),
                libsql::params![
                    owner,
                    TaskStatus::Pending.as_str(),
                    TaskStatus::InProgress.as_str()
                ],
            )
            .await?;
        collect_tasks(rows).await
    }

    /// Apply a partial edit. `updated_at` is bumped even when nothing else changes.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if `owner` has no such task and
    /// `DatabaseError::InvalidState` for a blank title.
    pub async fn update_task(
        &self,
        owner: &str,
        task_id: &str,
        update: TaskUpdate,
    ) -> Result<Task, DatabaseError> {
        if update.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(DatabaseError::InvalidState(
                "task title must not be empty".to_string(),
            ));
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref title) = update.title {
            sets.push(format!("title = ?{idx}"));
            params.push(title.clone().into());
            idx += 1;
        }
        if let Some(ref description) = update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(description.clone().into());
            idx += 1;
        }
        if let Some(due_date) = update.due_date {
            sets.push(format!("due_date = ?{idx}"));
            params.push(due_date.map_or(libsql::Value::Null, |d| format_date(d).into()));
            idx += 1;
        }
        if let Some(priority) = update.priority {
            sets.push(format!("priority = ?{idx}"));
            params.push(priority.as_str().into());
            idx += 1;
        }
        if let Some(status) = update.status {
            sets.push(format!("status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(format_datetime(Utc::now()).into());
        idx += 1;

        params.push(task_id.into());
        params.push(owner.into());
        let sql = format!(
            "UPDATE tasks SET {} WHERE id = ?{idx} AND user_id = ?{}",
            sets.join(", "),
            idx + 1
        );
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }

        tracing::debug!(task_id, fields = ?update, "updated task");
        self.get_task(owner, task_id).await
    }

    /// Mark a task completed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if `owner` has no such task.
    pub async fn complete_task(&self, owner: &str, task_id: &str) -> Result<Task, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE tasks SET status = ?1, updated_at = ?2 WHERE id = ?3 AND user_id = ?4",
                libsql::params![
                    TaskStatus::Completed.as_str(),
                    format_datetime(Utc::now()),
                    task_id,
                    owner
                ],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        self.get_task(owner, task_id).await
    }

    /// Delete a task. Its subtasks go with it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if `owner` has no such task.
    pub async fn delete_task(&self, owner: &str, task_id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "DELETE FROM tasks WHERE id = ?1 AND user_id = ?2",
                [task_id, owner],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(task_id, "deleted task");
        Ok(())
    }
}
