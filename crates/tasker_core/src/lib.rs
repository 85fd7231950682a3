pub mod date;
pub mod error;
pub mod menu;
pub mod model;
pub mod query;
pub mod validate;

#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::model::{Difficulty, Status, Task};
    use time::macros::{date, datetime};

    #[test]
    fn task_has_required_fields() {
        let created_at = datetime!(2026-02-10 08:00 UTC);
        let task = Task::new(
            "demo".to_string(),
            "a short note".to_string(),
            Status::InProgress,
            Difficulty::Medium,
            created_at,
            Some(date!(2026 - 03 - 01)),
        );

        assert_eq!(task.title, "demo");
        assert_eq!(task.description, "a short note");
        assert_eq!(task.status, Status::InProgress);
        assert_eq!(task.difficulty, Difficulty::Medium);
        assert_eq!(task.created_at, created_at);
        assert_eq!(task.edited_at, created_at);
        assert_eq!(task.due, Some(date!(2026 - 03 - 01)));
    }

    #[test]
    fn app_error_exposes_code() {
        let err = AppError::EmptyInput;
        assert_eq!(err.code(), "empty_input");
        assert!(!err.is_fatal());

        let err = AppError::io("stdin closed");
        assert_eq!(err.code(), "io_error");
        assert!(err.is_fatal());
    }
}
