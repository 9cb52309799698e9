//! The write contract between the intake workflow and a task backend.
//!
//! The intake core issues inserts only. Reads, edits, and deletes belong to
//! the backend's own API (see `quill-db`).

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::NewTask;

/// Errors a `TaskStore` may report for a single insert.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend refused the record (constraint, ownership, quota).
    #[error("Insert rejected: {0}")]
    Rejected(String),

    /// The backend itself failed.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Persistent task storage.
///
/// Implementations assign the record id and both timestamps at write time.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Insert a record and return its store-assigned id.
    async fn insert(&self, task: NewTask) -> Result<String, StoreError>;
}

#[async_trait]
impl<T: TaskStore + ?Sized> TaskStore for &T {
    async fn insert(&self, task: NewTask) -> Result<String, StoreError> {
        (**self).insert(task).await
    }
}

#[async_trait]
impl<T: TaskStore + ?Sized> TaskStore for std::sync::Arc<T> {
    async fn insert(&self, task: NewTask) -> Result<String, StoreError> {
        (**self).insert(task).await
    }
}
