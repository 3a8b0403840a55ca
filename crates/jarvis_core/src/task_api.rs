use crate::error::AppError;
use crate::model::{Document, Task, TaskStatus};
use crate::timestamp::now_rfc3339;

pub fn add_task(document: &mut Document, title: &str) -> Result<Task, AppError> {
    if title.trim().is_empty() {
        return Err(AppError::invalid_input("title is required"));
    }

    let task = Task {
        id: document.allocate_task_id()?,
        title: title.to_string(),
        status: TaskStatus::Pending,
        created: now_rfc3339()?,
        completed: None,
    };
    tracing::debug!(id = task.id, "adding task");

    document.tasks.push(task.clone());
    Ok(task)
}

pub fn list_tasks(document: &Document) -> &[Task] {
    &document.tasks
}

/// Marks the first task with `id` as completed.
///
/// Returns `Ok(None)` when no task matches; the document is left untouched.
/// Stored ids are never negative, so a negative `id` never matches.
pub fn complete_task(document: &mut Document, id: i64) -> Result<Option<Task>, AppError> {
    let Ok(id) = u64::try_from(id) else {
        return Ok(None);
    };
    let Some(task) = document.tasks.iter_mut().find(|task| task.id == id) else {
        return Ok(None);
    };

    let completed = now_rfc3339()?;
    task.status = TaskStatus::Completed;
    task.completed = Some(completed);
    Ok(Some(task.clone()))
}

/// Removes every task carrying `id` and returns how many were dropped.
pub fn delete_tasks(document: &mut Document, id: i64) -> usize {
    let Ok(id) = u64::try_from(id) else {
        return 0;
    };
    let before = document.tasks.len();
    document.tasks.retain(|task| task.id != id);
    let removed = before - document.tasks.len();
    tracing::debug!(id, removed, "deleted tasks");
    removed
}

#[cfg(test)]
mod tests {
    use super::{add_task, complete_task, delete_tasks, list_tasks};
    use crate::model::{Document, Task, TaskStatus};
    use time::OffsetDateTime;
    use time::format_description::well_known::Rfc3339;

    fn pending(id: u64, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            status: TaskStatus::Pending,
            created: "2026-10-19T00:00:00Z".to_string(),
            completed: None,
        }
    }

    #[test]
    fn add_task_rejects_blank_title() {
        let mut document = Document::default();
        let err = add_task(&mut document, "   ").unwrap_err();

        assert_eq!(err.code(), "invalid_input");
        assert!(document.tasks.is_empty());
    }

    #[test]
    fn add_task_appends_pending_tasks_in_order() {
        let mut document = Document::default();
        add_task(&mut document, "Buy milk").unwrap();
        add_task(&mut document, "Walk dog").unwrap();

        let tasks = list_tasks(&document);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, 1);
        assert_eq!(tasks[0].title, "Buy milk");
        assert_eq!(tasks[1].id, 2);
        assert_eq!(tasks[1].title, "Walk dog");
        assert!(tasks.iter().all(|task| task.status == TaskStatus::Pending));
        assert!(tasks.iter().all(|task| task.completed.is_none()));
        OffsetDateTime::parse(&tasks[0].created, &Rfc3339).unwrap();
    }

    #[test]
    fn add_task_keeps_title_as_typed() {
        let mut document = Document::default();
        let task = add_task(&mut document, "  padded  ").unwrap();

        assert_eq!(task.title, "  padded  ");
        assert_eq!(list_tasks(&document)[0].title, "  padded  ");
    }

    #[test]
    fn negative_id_never_matches() {
        let mut document = Document::default();
        document.tasks = vec![pending(1, "a")];
        let before = document.clone();

        assert!(complete_task(&mut document, -1).unwrap().is_none());
        assert_eq!(delete_tasks(&mut document, -1), 0);
        assert_eq!(document, before);
    }

    #[test]
    fn add_after_delete_does_not_reuse_id() {
        let mut document = Document::default();
        add_task(&mut document, "first").unwrap();
        add_task(&mut document, "second").unwrap();
        delete_tasks(&mut document, 1);

        let task = add_task(&mut document, "third").unwrap();

        assert_eq!(task.id, 3);
        let ids: Vec<u64> = document.tasks.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn complete_task_marks_only_the_matching_task() {
        let mut document = Document::default();
        document.tasks = vec![pending(1, "a"), pending(2, "b")];

        let completed = complete_task(&mut document, 2).unwrap().unwrap();

        assert_eq!(completed.status, TaskStatus::Completed);
        let stamp = completed.completed.as_deref().unwrap();
        OffsetDateTime::parse(stamp, &Rfc3339).unwrap();
        assert_eq!(document.tasks[0], pending(1, "a"));
        assert_eq!(document.tasks[1], completed);
    }

    #[test]
    fn complete_task_only_touches_first_duplicate() {
        let mut document = Document::default();
        document.tasks = vec![pending(1, "a"), pending(1, "b")];

        complete_task(&mut document, 1).unwrap();

        assert!(document.tasks[0].is_completed());
        assert!(!document.tasks[1].is_completed());
    }

    #[test]
    fn complete_task_missing_id_leaves_document_unchanged() {
        let mut document = Document::default();
        document.tasks = vec![pending(1, "a")];
        let before = document.clone();

        let result = complete_task(&mut document, 9).unwrap();

        assert!(result.is_none());
        assert_eq!(document, before);
    }

    #[test]
    fn delete_tasks_removes_every_duplicate() {
        let mut document = Document::default();
        document.tasks = vec![pending(1, "a"), pending(2, "b"), pending(1, "c")];

        let removed = delete_tasks(&mut document, 1);

        assert_eq!(removed, 2);
        assert_eq!(document.tasks, vec![pending(2, "b")]);
    }

    #[test]
    fn delete_tasks_missing_id_is_a_no_op() {
        let mut document = Document::default();
        document.tasks = vec![pending(1, "a")];
        let before = document.clone();

        assert_eq!(delete_tasks(&mut document, 1), 1);
        let after_first = document.clone();
        assert_eq!(delete_tasks(&mut document, 1), 0);

        assert_ne!(after_first, before);
        assert_eq!(document, after_first);
    }
}
