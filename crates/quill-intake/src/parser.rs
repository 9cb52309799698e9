//! Keyword-based free-text task parser.
//!
//! Recognizes a trailing `" by <when>"` clause for the due date and a handful
//! of priority phrases anywhere in the text. Matching is ASCII
//! case-insensitive. Anything unrecognized falls back to defaults: no due
//! date, medium priority.

use chrono::{Days, Local, NaiveDate};
use quill_core::entities::ParsedTask;
use quill_core::enums::Priority;

/// Splits the title from the date clause at its first occurrence.
const DATE_SEPARATOR: &str = " by ";

/// Date-clause phrases and their offset from today, first match wins.
const DATE_RULES: &[(&str, u64)] = &[("tomorrow", 1), ("next week", 7), ("today", 0)];

const HIGH_PRIORITY_CUES: &[&str] = &["urgent", "important", "critical"];
const LOW_PRIORITY_CUES: &[&str] = &["low priority", "when time permits"];

/// Converts one line of free text into a [`ParsedTask`].
///
/// The parser is total: every input, including the empty string, yields a
/// result. Callers validate the title before persisting.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextIntakeParser;

impl TextIntakeParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse relative to today's local date.
    #[must_use]
    pub fn parse(&self, text: &str) -> ParsedTask {
        self.parse_on(text, Local::now().date_naive())
    }

    /// Parse relative to a fixed reference date.
    #[must_use]
    pub fn parse_on(&self, text: &str, today: NaiveDate) -> ParsedTask {
        // ASCII lowercasing keeps byte offsets aligned with `text`.
        let lower = text.to_ascii_lowercase();

        let (title, due_date) = match lower.find(DATE_SEPARATOR) {
            Some(at) => {
                let clause = &lower[at + DATE_SEPARATOR.len()..];
                (text[..at].trim(), resolve_due_date(clause, today))
            }
            None => (text.trim(), None),
        };

        ParsedTask {
            title: title.to_string(),
            description: String::new(),
            due_date,
            priority: resolve_priority(&lower),
        }
    }
}

fn resolve_due_date(clause: &str, today: NaiveDate) -> Option<NaiveDate> {
    DATE_RULES
        .iter()
        .find(|(phrase, _)| clause.contains(phrase))
        .and_then(|&(_, days)| today.checked_add_days(Days::new(days)))
}

fn resolve_priority(lower: &str) -> Priority {
    if HIGH_PRIORITY_CUES.iter().any(|cue| lower.contains(cue)) {
        Priority::High
    } else if LOW_PRIORITY_CUES.iter().any(|cue| lower.contains(cue)) {
        Priority::Low
    } else {
        Priority::Medium
    }
}
