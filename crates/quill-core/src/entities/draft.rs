use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Priority, TaskStatus};

/// An editable, not-yet-persisted task form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
}

impl TaskDraft {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Merge a parse result into the form.
    ///
    /// Only the fields the parser populates are overwritten: title, due date,
    /// and priority. Description and status keep whatever the user entered.
    pub fn apply_parsed(&mut self, parsed: ParsedTask) {
        self.title = parsed.title;
        self.due_date = parsed.due_date;
        self.priority = parsed.priority;
    }

    /// Whether the title is non-empty after trimming.
    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// Structured output of the free-text intake parser.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ParsedTask {
    pub title: String,
    /// Reserved; the keyword parser always leaves this empty.
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_parsed_keeps_description_and_status() {
        let mut draft = TaskDraft {
            title: "old".into(),
            description: "keep me".into(),
            due_date: None,
            priority: Priority::Low,
            status: TaskStatus::InProgress,
        };
        let due = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        draft.apply_parsed(ParsedTask {
            title: "Finish report".into(),
            description: String::new(),
            due_date: Some(due),
            priority: Priority::High,
        });

        assert_eq!(draft.title, "Finish report");
        assert_eq!(draft.due_date, Some(due));
        assert_eq!(draft.priority, Priority::High);
        assert_eq!(draft.description, "keep me");
        assert_eq!(draft.status, TaskStatus::InProgress);
    }

    #[test]
    fn whitespace_title_is_not_a_title() {
        assert!(!TaskDraft::new("   ").has_title());
        assert!(TaskDraft::new(" x ").has_title());
    }
}
