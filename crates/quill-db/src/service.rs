//! Service layer over the raw database handle.
//!
//! `TaskService` wraps `QuillDb`. All repo methods are implemented as
//! `impl TaskService` blocks in `repos/`.

use crate::QuillDb;
use crate::error::DatabaseError;

/// Owner-scoped task operations.
pub struct TaskService {
    db: QuillDb,
}

impl TaskService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = QuillDb::open_local(db_path).await?;
        tracing::debug!(db_path, "opened task database");
        Ok(Self { db })
    }

    /// Create from an existing `QuillDb` (for testing).
    #[must_use]
    pub const fn from_db(db: QuillDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &QuillDb {
        &self.db
    }
}
