//! Shared test utilities for quill-db unit tests.

pub mod helpers {
    use quill_core::entities::NewTask;
    use quill_core::enums::{Priority, TaskStatus};

    use crate::QuillDb;
    use crate::service::TaskService;

    /// Create an in-memory TaskService.
    pub async fn test_service() -> TaskService {
        let db = QuillDb::open_local(":memory:").await.unwrap();
        TaskService::from_db(db)
    }

    /// A pending, medium-priority top-level task payload.
    pub fn new_task(user_id: &str, title: &str) -> NewTask {
        NewTask {
            user_id: user_id.to_string(),
            parent_task_id: None,
            title: title.to_string(),
            description: String::new(),
            due_date: None,
            priority: Priority::Medium,
            status: TaskStatus::Pending,
        }
    }
}
