//! The intake workflow writing through the libSQL store.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use quill_core::entities::TaskDraft;
use quill_core::enums::{Priority, TaskStatus};
use quill_core::identity::AuthIdentity;
use quill_db::repos::task::TaskFilter;
use quill_db::service::TaskService;
use quill_intake::{IntakeError, TaskIntake, TextIntakeParser};

async fn service() -> TaskService {
    TaskService::new_local(":memory:").await.unwrap()
}

#[tokio::test]
async fn parsed_draft_with_suggestions_is_persisted() {
    let intake = TaskIntake::with_keyword_suggestions(service().await);
    let owner = AuthIdentity::new("user_2abc");
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

    let parsed =
        TextIntakeParser::new().parse_on("Finish quarterly report by tomorrow urgent", today);
    let mut draft = TaskDraft::new("");
    draft.apply_parsed(parsed);

    let suggestions = intake
        .request_suggestions(&draft.title, None, Some(&owner))
        .await
        .unwrap();
    assert_eq!(suggestions.len(), 5);

    let selected = BTreeSet::from([0, 4]);
    let outcome = intake
        .commit(&draft, Some(&owner), &selected, &suggestions)
        .await
        .unwrap();
    assert_eq!(outcome.subtask_ids.len(), 2);

    let svc = intake.store();
    let task = svc.get_task("user_2abc", &outcome.task_id).await.unwrap();
    assert_eq!(task.title, "Finish quarterly report");
    assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2026, 10, 17));
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.status, TaskStatus::Pending);

    let subtasks = svc.list_subtasks("user_2abc", &outcome.task_id).await.unwrap();
    let titles: Vec<_> = subtasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Gather data for report", "Format final document"]);
    assert_eq!(subtasks[1].priority, Priority::Low);
    assert!(subtasks.iter().all(|t| t.status == TaskStatus::Pending && t.due_date.is_none()));
}

#[tokio::test]
async fn missing_owner_writes_nothing() {
    let intake = TaskIntake::with_keyword_suggestions(service().await);
    let draft = TaskDraft::new("Orphan");

    let result = intake.commit(&draft, None, &BTreeSet::new(), &[]).await;
    assert!(matches!(result, Err(IntakeError::Validation(_))));

    let mut rows = intake
        .store()
        .db()
        .conn()
        .query("SELECT COUNT(*) FROM tasks", ())
        .await
        .unwrap();
    let count: i64 = rows.next().await.unwrap().unwrap().get(0).unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn blank_owner_id_writes_nothing() {
    let svc = service().await;
    let intake = TaskIntake::with_keyword_suggestions(&svc);

    let result = intake
        .commit(
            &TaskDraft::new("Walk dog"),
            Some(&AuthIdentity::new("   ")),
            &BTreeSet::new(),
            &[],
        )
        .await;
    assert!(matches!(result, Err(IntakeError::Validation(_))));

    let mut rows = svc
        .db()
        .conn()
        .query("SELECT COUNT(*) FROM tasks", ())
        .await
        .unwrap();
    let count: i64 = rows.next().await.unwrap().unwrap().get(0).unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn tasks_survive_reopening_a_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quill.db");
    let path = path.to_str().unwrap();

    let id = {
        let svc = TaskService::new_local(path).await.unwrap();
        let intake = TaskIntake::with_keyword_suggestions(svc);
        let draft = TaskDraft::new("Plan offsite");
        intake
            .commit(&draft, Some(&AuthIdentity::new("u1")), &BTreeSet::new(), &[])
            .await
            .unwrap()
            .task_id
    };

    let reopened = TaskService::new_local(path).await.unwrap();
    assert_eq!(reopened.get_task("u1", &id).await.unwrap().title, "Plan offsite");
}

#[tokio::test]
async fn committed_tasks_show_up_in_top_level_listing() {
    let intake = TaskIntake::with_keyword_suggestions(service().await);
    let owner = AuthIdentity::new("u1");
    let draft = TaskDraft::new("Project kickoff");

    let suggestions = intake
        .request_suggestions(&draft.title, None, Some(&owner))
        .await
        .unwrap();
    let all: BTreeSet<usize> = suggestions.iter().map(|s| s.index).collect();
    intake
        .commit(&draft, Some(&owner), &all, &suggestions)
        .await
        .unwrap();

    let svc = intake.store();
    let top = svc
        .list_tasks(
            "u1",
            &TaskFilter {
                top_level_only: true,
                ..TaskFilter::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(top.len(), 1);

    let everything = svc.list_tasks("u1", &TaskFilter::default()).await.unwrap();
    assert_eq!(everything.len(), 1 + suggestions.len());
}
