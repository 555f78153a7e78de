#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, NaiveDate};
    use tasko::db::store::TaskStore;
    use tasko::db::tasks::Tasks;
    use tasko::libs::task::{NewTask, Priority, Status, TaskError, TaskPatch};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            TaskTestContext { temp_dir }
        }
    }

    impl TaskTestContext {
        fn service(&self) -> Tasks {
            Tasks::with_store(TaskStore::with_path(self.temp_dir.path().join("tasks.json")))
        }
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    fn new_task(title: &str, due_in_days: i64) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: String::new(),
            due_date: today() + Duration::days(due_in_days),
            priority: Priority::Medium,
            status: Status::Pending,
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_assigns_increasing_ids(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.service();

        let first = tasks.create(new_task("First", 1)).unwrap();
        let second = tasks.create(new_task("Second", 2)).unwrap();
        assert!(second.id > first.id);

        // Deleting the newest task must not free its id for reuse
        tasks.delete(second.id).unwrap();
        let third = tasks.create(new_task("Third", 3)).unwrap();
        assert!(third.id > second.id);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_rejects_blank_title(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.service();

        let result = tasks.create(new_task("   ", 1));
        assert!(matches!(result, Err(TaskError::EmptyTitle)));
        assert_eq!(tasks.list().len(), 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_trims_title(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.service();

        let task = tasks.create(new_task("  Buy milk  ", 1)).unwrap();
        assert_eq!(task.title, "Buy milk");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_rejects_past_due_date(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.service();

        let result = tasks.create(new_task("Yesterday", -1));
        assert!(matches!(result, Err(TaskError::DueDateInPast(_))));
        assert_eq!(tasks.list().len(), 0);

        // A due date of today is still valid
        let task = tasks.create(new_task("Today", 0)).unwrap();
        assert_eq!(task.due_date, today());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_changes_supplied_fields(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.service();
        let task = tasks.create(new_task("Original", 1)).unwrap();

        let patch = TaskPatch {
            title: Some("Renamed".to_string()),
            description: Some("Now with details".to_string()),
            priority: Some(Priority::High),
            status: Some(Status::InProgress),
            ..TaskPatch::default()
        };
        let updated = tasks.update(task.id, patch).unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.description, "Now with details");
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(updated.status, Status::InProgress);
        // The untouched field keeps its value
        assert_eq!(updated.due_date, task.due_date);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_ignores_blank_title(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.service();
        let task = tasks.create(new_task("Keep me", 1)).unwrap();

        let patch = TaskPatch {
            title: Some("   ".to_string()),
            status: Some(Status::Done),
            ..TaskPatch::default()
        };
        let updated = tasks.update(task.id, patch).unwrap();

        // The blank title is a field-level no-op, not a rejection
        assert_eq!(updated.title, "Keep me");
        assert_eq!(updated.status, Status::Done);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_ignores_past_due_date(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.service();
        let task = tasks.create(new_task("Dated", 1)).unwrap();

        let patch = TaskPatch {
            due_date: Some(today() - Duration::days(1)),
            ..TaskPatch::default()
        };
        let updated = tasks.update(task.id, patch).unwrap();
        assert_eq!(updated.due_date, task.due_date);

        let patch = TaskPatch {
            due_date: Some(today() + Duration::days(5)),
            ..TaskPatch::default()
        };
        let updated = tasks.update(task.id, patch).unwrap();
        assert_eq!(updated.due_date, today() + Duration::days(5));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_unknown_id(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.service();
        tasks.create(new_task("Only task", 1)).unwrap();

        let patch = TaskPatch {
            title: Some("Never applied".to_string()),
            ..TaskPatch::default()
        };
        let result = tasks.update(999, patch);
        assert!(matches!(result, Err(TaskError::NotFound(999))));
        assert_eq!(tasks.list()[0].title, "Only task");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_removes_task(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.service();
        let task = tasks.create(new_task("Short lived", 1)).unwrap();

        let removed = tasks.delete(task.id).unwrap();
        assert_eq!(removed.id, task.id);
        assert!(tasks.list().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_unknown_id(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.service();
        tasks.create(new_task("Survivor", 1)).unwrap();

        let result = tasks.delete(42);
        assert!(matches!(result, Err(TaskError::NotFound(42))));
        assert_eq!(tasks.list().len(), 1);
    }
}
