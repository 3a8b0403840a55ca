pub mod assistant;
pub mod error;
pub mod event_api;
pub mod model;
pub mod stats;
pub mod storage;
pub mod task_api;
mod timestamp;

#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::model::{Task, TaskStatus};

    #[test]
    fn task_has_required_fields() {
        let task = Task {
            id: 1,
            title: "demo".to_string(),
            status: TaskStatus::Pending,
            created: "2026-10-19T00:00:00Z".to_string(),
            completed: None,
        };

        assert_eq!(task.id, 1);
        assert_eq!(task.title, "demo");
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(!task.is_completed());
        assert_eq!(task.completed, None);
    }

    #[test]
    fn app_error_exposes_code_and_message() {
        let err = AppError::invalid_input("missing title");
        assert_eq!(err.code(), "invalid_input");
        assert_eq!(err.message(), "missing title");
        assert_eq!(err.to_string(), "invalid_input - missing title");
    }
}
