//! The create-task workflow.
//!
//! ```text
//! empty form → (parsed from text) → (enriched with suggestions) → committed
//! ```
//!
//! `commit` writes the primary task, then each selected suggestion as a
//! linked subtask. Subtask writes are sequential and best effort: a failure is
//! logged and skipped, and nothing already written is undone.

use std::collections::BTreeSet;

use quill_core::entities::{NewTask, ParsedTask, SuggestedSubtask, TaskDraft};
use quill_core::identity::AuthIdentity;
use quill_core::store::TaskStore;

use crate::error::IntakeError;
use crate::parser::TextIntakeParser;
use crate::suggest::{KeywordSuggester, SuggestionEngine};

/// Ids written by a successful [`TaskIntake::commit`].
///
/// `subtask_ids` follows suggestion order. It is shorter than the selection
/// when some subtask inserts failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    pub task_id: String,
    pub subtask_ids: Vec<String>,
}

/// Drives task creation against an explicit store and suggestion engine.
pub struct TaskIntake<S, E = KeywordSuggester> {
    store: S,
    engine: E,
    parser: TextIntakeParser,
}

impl<S: TaskStore> TaskIntake<S> {
    /// Intake backed by the keyword suggestion engine.
    pub const fn with_keyword_suggestions(store: S) -> Self {
        Self::new(store, KeywordSuggester::new())
    }
}

impl<S: TaskStore, E: SuggestionEngine> TaskIntake<S, E> {
    pub const fn new(store: S, engine: E) -> Self {
        Self {
            store,
            engine,
            parser: TextIntakeParser::new(),
        }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Parse free text for the form. Merge with [`TaskDraft::apply_parsed`].
    #[must_use]
    pub fn apply_parsed_draft(&self, raw_text: &str) -> ParsedTask {
        self.parser.parse(raw_text)
    }

    /// Ask the engine for a suggestion batch.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::Validation` if `title` is empty or whitespace.
    pub async fn request_suggestions(
        &self,
        title: &str,
        description: Option<&str>,
        owner: Option<&AuthIdentity>,
    ) -> Result<Vec<SuggestedSubtask>, IntakeError> {
        if title.trim().is_empty() {
            return Err(IntakeError::Validation(
                "enter a task title before requesting suggestions".into(),
            ));
        }
        Ok(self.engine.suggest(title, description, owner).await)
    }

    /// Persist `draft` and the suggestions in `all` whose index is in
    /// `selected`.
    ///
    /// # Errors
    ///
    /// - `IntakeError::Validation` for an empty title or a missing or blank
    ///   owner id; no
    ///   writes are attempted.
    /// - `IntakeError::WriteFailure` if the primary insert fails; no subtasks
    ///   are attempted.
    pub async fn commit(
        &self,
        draft: &TaskDraft,
        owner: Option<&AuthIdentity>,
        selected: &BTreeSet<usize>,
        all: &[SuggestedSubtask],
    ) -> Result<CommitOutcome, IntakeError> {
        if !draft.has_title() {
            return Err(IntakeError::Validation("task title is required".into()));
        }
        let owner = owner
            .filter(|identity| !identity.user_id.trim().is_empty())
            .ok_or_else(|| {
                IntakeError::Validation("you must be signed in to create a task".into())
            })?;

        let task_id = self
            .store
            .insert(NewTask::primary(&owner.user_id, draft))
            .await
            .map_err(IntakeError::WriteFailure)?;
        tracing::debug!(%task_id, "created primary task");

        let mut subtask_ids = Vec::new();
        for suggestion in all.iter().filter(|s| selected.contains(&s.index)) {
            let record = NewTask::subtask(
                &owner.user_id,
                &task_id,
                &suggestion.title,
                suggestion.effective_priority(),
            );
            match self.store.insert(record).await {
                Ok(id) => subtask_ids.push(id),
                Err(error) => {
                    tracing::warn!(
                        %error,
                        parent = %task_id,
                        title = %suggestion.title,
                        "failed to create subtask; skipping"
                    );
                }
            }
        }

        Ok(CommitOutcome {
            task_id,
            subtask_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::store::StoreError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingStore(AtomicUsize);

    #[async_trait::async_trait]
    impl TaskStore for CountingStore {
        async fn insert(&self, _task: NewTask) -> Result<String, StoreError> {
            let n = self.0.fetch_add(1, Ordering::SeqCst);
            Ok(format!("tsk-{n:08x}"))
        }
    }

    fn intake() -> TaskIntake<CountingStore> {
        TaskIntake::with_keyword_suggestions(CountingStore(AtomicUsize::new(0)))
    }

    #[tokio::test]
    async fn blank_title_cannot_request_suggestions() {
        let result = intake().request_suggestions("  ", None, None).await;
        assert!(matches!(result, Err(IntakeError::Validation(_))));
    }

    #[tokio::test]
    async fn suggestions_pass_through_engine() {
        let batch = intake()
            .request_suggestions("Board presentation", None, None)
            .await
            .unwrap();
        assert_eq!(batch.len(), 5);
        assert_eq!(batch[0].title, "Outline presentation structure");
    }

    #[test]
    fn apply_parsed_draft_delegates_to_parser() {
        let parsed = intake().apply_parsed_draft("Renew passport by today, urgent");
        assert_eq!(parsed.title, "Renew passport");
        assert!(parsed.due_date.is_some());
    }

    #[tokio::test]
    async fn commit_without_selection_writes_primary_only() {
        let intake = intake();
        let outcome = intake
            .commit(
                &TaskDraft::new("Walk dog"),
                Some(&AuthIdentity::new("user_1")),
                &BTreeSet::new(),
                &[],
            )
            .await
            .unwrap();
        assert_eq!(outcome.task_id, "tsk-00000000");
        assert!(outcome.subtask_ids.is_empty());
        assert_eq!(intake.store().0.load(Ordering::SeqCst), 1);
    }
}
