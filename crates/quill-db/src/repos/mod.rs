//! Repository modules implementing task CRUD.
//!
//! Each module adds methods to `TaskService` via `impl TaskService` blocks.

pub mod task;
