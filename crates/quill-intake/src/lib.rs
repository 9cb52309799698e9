//! # quill-intake
//!
//! Turns free text and a task title into task records.
//!
//! - [`parser`]: keyword extraction of title, due date, and priority
//! - [`suggest`]: keyword-category subtask suggestions behind an async trait
//! - [`orchestrator`]: the create-task workflow that writes a primary task
//!   and the selected suggestions through a `TaskStore`

pub mod error;
pub mod orchestrator;
pub mod parser;
pub mod suggest;

pub use error::IntakeError;
pub use orchestrator::{CommitOutcome, TaskIntake};
pub use parser::TextIntakeParser;
pub use suggest::{KeywordSuggester, SuggestionEngine};
