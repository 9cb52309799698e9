//! Entity structs for Quill domain objects.
//!
//! `Task` maps to the `tasks` table. `TaskDraft`, `ParsedTask`, and
//! `SuggestedSubtask` are in-memory only. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON output and schema validation.

mod draft;
mod suggestion;
mod task;

pub use draft::{ParsedTask, TaskDraft};
pub use suggestion::SuggestedSubtask;
pub use task::{NewTask, Task};
