//! Subtask suggestions.
//!
//! [`SuggestionEngine`] is the async seam a remote inference backend would
//! implement. [`KeywordSuggester`] is the rule-based engine: it looks for
//! category keywords in the task title and returns that category's fixed
//! breakdown.

use async_trait::async_trait;
use quill_core::entities::SuggestedSubtask;
use quill_core::enums::Priority;
use quill_core::identity::AuthIdentity;

/// Produces an ordered suggestion batch for a task.
#[async_trait]
pub trait SuggestionEngine: Send + Sync {
    /// Suggest subtasks for a task. Never fails; an engine with nothing
    /// specific to offer returns a generic breakdown.
    async fn suggest(
        &self,
        title: &str,
        description: Option<&str>,
        owner: Option<&AuthIdentity>,
    ) -> Vec<SuggestedSubtask>;
}

/// The breakdown a title was matched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionCategory {
    Report,
    Project,
    Presentation,
    Planning,
    Generic,
}

enum Template {
    /// Titles used as written.
    Fixed(&'static [(&'static str, Priority)]),
    /// Each entry becomes `{prefix} "{task title}"`.
    QuotingTitle(&'static [(&'static str, Priority)]),
}

struct Rule {
    category: SuggestionCategory,
    keywords: &'static [&'static str],
    template: Template,
}

/// Evaluated top to bottom; the first rule with a matching keyword wins.
static RULES: &[Rule] = &[
    Rule {
        category: SuggestionCategory::Report,
        keywords: &["report"],
        template: Template::Fixed(&[
            ("Gather data for report", Priority::High),
            ("Create outline for report", Priority::Medium),
            ("Write first draft", Priority::Medium),
            ("Review and revise report", Priority::Medium),
            ("Format final document", Priority::Low),
        ]),
    },
    Rule {
        category: SuggestionCategory::Project,
        keywords: &["project"],
        template: Template::Fixed(&[
            ("Define project scope", Priority::High),
            ("Create project timeline", Priority::High),
            ("Assign team responsibilities", Priority::Medium),
            ("Set up project tracking", Priority::Medium),
            ("Schedule project meetings", Priority::Low),
        ]),
    },
    Rule {
        category: SuggestionCategory::Presentation,
        keywords: &["presentation"],
        template: Template::Fixed(&[
            ("Outline presentation structure", Priority::High),
            ("Create slides", Priority::Medium),
            ("Add speaking notes", Priority::Medium),
            ("Practice delivery", Priority::High),
            ("Prepare for Q&A", Priority::Medium),
        ]),
    },
    Rule {
        category: SuggestionCategory::Planning,
        keywords: &["plan", "organize"],
        template: Template::Fixed(&[
            ("Brainstorm ideas", Priority::Medium),
            ("Create initial plan", Priority::High),
            ("Gather resources", Priority::Medium),
            ("Implement plan", Priority::High),
            ("Review and adjust", Priority::Medium),
        ]),
    },
];

static GENERIC: Template = Template::QuotingTitle(&[
    ("Research for", Priority::Medium),
    ("Plan approach for", Priority::High),
    ("Execute", Priority::High),
    ("Review and finalize", Priority::Medium),
]);

/// Rule-based suggestion engine keyed on the task title.
///
/// Description and owner are accepted for interface parity with a remote
/// backend and are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSuggester;

impl KeywordSuggester {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Which breakdown `title` maps to.
    #[must_use]
    pub fn category(&self, title: &str) -> SuggestionCategory {
        match_rule(&title.to_lowercase()).map_or(SuggestionCategory::Generic, |rule| rule.category)
    }

    /// Synchronous core of [`SuggestionEngine::suggest`].
    #[must_use]
    pub fn suggest_for(&self, title: &str) -> Vec<SuggestedSubtask> {
        let template = match_rule(&title.to_lowercase()).map_or(&GENERIC, |rule| &rule.template);
        expand(template, title)
    }
}

#[async_trait]
impl SuggestionEngine for KeywordSuggester {
    async fn suggest(
        &self,
        title: &str,
        _description: Option<&str>,
        _owner: Option<&AuthIdentity>,
    ) -> Vec<SuggestedSubtask> {
        self.suggest_for(title)
    }
}

fn match_rule(lower_title: &str) -> Option<&'static Rule> {
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| lower_title.contains(keyword)))
}

fn expand(template: &Template, title: &str) -> Vec<SuggestedSubtask> {
    let (entries, quote_title) = match template {
        Template::Fixed(entries) => (*entries, false),
        Template::QuotingTitle(entries) => (*entries, true),
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, &(text, priority))| SuggestedSubtask {
            index,
            title: if quote_title {
                format!("{text} \"{title}\"")
            } else {
                text.to_string()
            },
            priority: Some(priority),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn titles(batch: &[SuggestedSubtask]) -> Vec<&str> {
        batch.iter().map(|s| s.title.as_str()).collect()
    }

    #[tokio::test]
    async fn report_breakdown() {
        let batch = KeywordSuggester::new()
            .suggest("Quarterly report", None, None)
            .await;

        assert_eq!(
            titles(&batch),
            [
                "Gather data for report",
                "Create outline for report",
                "Write first draft",
                "Review and revise report",
                "Format final document",
            ]
        );
        let priorities: Vec<_> = batch.iter().map(|s| s.priority).collect();
        assert_eq!(
            priorities,
            [
                Some(Priority::High),
                Some(Priority::Medium),
                Some(Priority::Medium),
                Some(Priority::Medium),
                Some(Priority::Low),
            ]
        );
        let indices: Vec<_> = batch.iter().map(|s| s.index).collect();
        assert_eq!(indices, [0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn generic_breakdown_quotes_title() {
        let batch = KeywordSuggester::new()
            .suggest("Family dinner", Some("Sunday"), None)
            .await;

        assert_eq!(
            titles(&batch),
            [
                "Research for \"Family dinner\"",
                "Plan approach for \"Family dinner\"",
                "Execute \"Family dinner\"",
                "Review and finalize \"Family dinner\"",
            ]
        );
        assert!(batch.iter().all(|s| s.title.contains("Family dinner")));
        assert_eq!(batch[1].priority, Some(Priority::High));
    }

    #[rstest]
    #[case("Quarterly REPORT", SuggestionCategory::Report)]
    #[case("Project report", SuggestionCategory::Report)]
    #[case("New project kickoff", SuggestionCategory::Project)]
    #[case("Presentation for the board", SuggestionCategory::Presentation)]
    #[case("Plan the offsite", SuggestionCategory::Planning)]
    #[case("Organize garage", SuggestionCategory::Planning)]
    #[case("Buy a planter", SuggestionCategory::Planning)]
    #[case("Family dinner", SuggestionCategory::Generic)]
    #[case("", SuggestionCategory::Generic)]
    fn category_priority_order(#[case] title: &str, #[case] expected: SuggestionCategory) {
        assert_eq!(KeywordSuggester::new().category(title), expected);
    }

    #[tokio::test]
    async fn description_is_not_inspected() {
        let engine = KeywordSuggester::new();
        let batch = engine
            .suggest("Groceries", Some("quarterly report"), None)
            .await;
        assert_eq!(batch.len(), 4);
        assert_eq!(engine.category("Groceries"), SuggestionCategory::Generic);
    }

    #[test]
    fn fixed_lists_have_five_entries() {
        let engine = KeywordSuggester::new();
        for title in ["report", "project", "presentation", "plan", "organize"] {
            assert_eq!(engine.suggest_for(title).len(), 5, "{title}");
        }
    }

    #[test]
    fn suggestions_are_repeatable() {
        let engine = KeywordSuggester::new();
        assert_eq!(
            engine.suggest_for("Team presentation"),
            engine.suggest_for("Team presentation")
        );
        assert_eq!(engine.suggest_for("Walk dog"), engine.suggest_for("Walk dog"));
    }
}
