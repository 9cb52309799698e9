//! `TaskStore` backed by the libSQL task table.

use async_trait::async_trait;

use quill_core::entities::NewTask;
use quill_core::store::{StoreError, TaskStore};

use crate::error::DatabaseError;
use crate::service::TaskService;

impl From<DatabaseError> for StoreError {
    fn from(e: DatabaseError) -> Self {
        match e {
            DatabaseError::InvalidState(msg) => Self::Rejected(msg),
            other => Self::Backend(anyhow::Error::new(other)),
        }
    }
}

#[async_trait]
impl TaskStore for TaskService {
    async fn insert(&self, task: NewTask) -> Result<String, StoreError> {
        let stored = self.create_task(&task).await?;
        Ok(stored.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{new_task, test_service};
    use quill_core::enums::Priority;

    #[tokio::test]
    async fn insert_returns_stored_id() {
        let svc = test_service().await;
        let id = svc.insert(new_task("u1", "Via trait")).await.unwrap();
        assert_eq!(svc.get_task("u1", &id).await.unwrap().title, "Via trait");
    }

    #[tokio::test]
    async fn invalid_parent_maps_to_rejected() {
        let svc = test_service().await;
        let result = svc
            .insert(NewTask::subtask("u1", "tsk-missing0", "Orphan", Priority::Low))
            .await;
        assert!(matches!(result, Err(StoreError::Rejected(_))));
    }

    #[test]
    fn other_errors_map_to_backend() {
        let err: StoreError = DatabaseError::NoResult.into();
        assert!(matches!(err, StoreError::Backend(_)));
    }
}
