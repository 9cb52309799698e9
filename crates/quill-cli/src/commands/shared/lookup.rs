use quill_core::errors::CoreError;
use quill_db::error::DatabaseError;

/// Report a missing or foreign task as `NotFound`; pass other errors through.
pub fn task_lookup_error(error: DatabaseError, id: &str) -> anyhow::Error {
    match error {
        DatabaseError::NoResult => CoreError::NotFound {
            entity_type: "task".into(),
            id: id.into(),
        }
        .into(),
        other => other.into(),
    }
}
