#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use std::fs;
    use task_tracker::libs::clock::FixedClock;
    use task_tracker::libs::error::{ErrorKind, TaskError};
    use task_tracker::libs::store::TaskStore;
    use task_tracker::libs::task::TaskStatus;
    use task_tracker::libs::tasks::Tasks;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    fn start_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap().and_hms_opt(9, 0, 0).unwrap()
    }

    struct TaskTestContext {
        _temp_dir: TempDir,
        tasks: Tasks<FixedClock>,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = TaskStore::new(temp_dir.path().join("tasks.json"));
            store.initialize().unwrap();
            TaskTestContext {
                _temp_dir: temp_dir,
                tasks: Tasks::new(store, FixedClock::new(start_time())),
            }
        }
    }

    impl TaskTestContext {
        fn file_contents(&self) -> String {
            fs::read_to_string(self.tasks.store().path()).unwrap()
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_assigns_increasing_ids(ctx: &mut TaskTestContext) {
        let ids: Vec<u32> = ["one", "two", "three", "four"].iter().map(|d| ctx.tasks.add(d).unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let stored = ctx.tasks.list(None).unwrap();
        assert_eq!(stored.len(), 4);
        assert!(stored.iter().all(|t| t.status == TaskStatus::Todo));
        assert!(stored.iter().all(|t| t.created_at == t.updated_at));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_rejects_empty_description(ctx: &mut TaskTestContext) {
        let before = ctx.file_contents();
        let err = ctx.tasks.add("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(ctx.file_contents(), before);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_deleted_id_is_never_reused(ctx: &mut TaskTestContext) {
        ctx.tasks.add("a").unwrap();
        ctx.tasks.add("b").unwrap();
        ctx.tasks.add("c").unwrap();

        ctx.tasks.delete(2).unwrap();
        assert_eq!(ctx.tasks.add("d").unwrap(), 4);

        let ids: Vec<u32> = ctx.tasks.list(None).unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_changes_description_and_updated_at(ctx: &mut TaskTestContext) {
        let id = ctx.tasks.add("draft").unwrap();
        ctx.tasks.clock().advance(Duration::minutes(15));

        let updated = ctx.tasks.update(id, "final").unwrap();
        assert_eq!(updated.description, "final");
        assert_eq!(updated.created_at, start_time());
        assert_eq!(updated.updated_at, start_time() + Duration::minutes(15));

        let stored = &ctx.tasks.list(None).unwrap()[0];
        assert_eq!(stored, &updated);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_missing_task_leaves_store_unchanged(ctx: &mut TaskTestContext) {
        for d in ["one", "two", "three"] {
            ctx.tasks.add(d).unwrap();
        }
        let before = ctx.file_contents();

        let err = ctx.tasks.update(999, "x").unwrap_err();
        assert!(matches!(err, TaskError::TaskNotFound(999)));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(ctx.file_contents(), before);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_rejects_empty_description(ctx: &mut TaskTestContext) {
        let id = ctx.tasks.add("keep me").unwrap();
        assert_eq!(ctx.tasks.update(id, "  ").unwrap_err().kind(), ErrorKind::InvalidInput);
        assert_eq!(ctx.tasks.list(None).unwrap()[0].description, "keep me");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_missing_task_does_not_rewrite_file(ctx: &mut TaskTestContext) {
        ctx.tasks.add("only").unwrap();
        let path = ctx.tasks.store().path().to_path_buf();
        let modified = fs::metadata(&path).unwrap().modified().unwrap();
        let before = ctx.file_contents();

        assert_eq!(ctx.tasks.delete(7).unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(ctx.file_contents(), before);
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), modified);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_mark_allows_any_forward_or_backward_move(ctx: &mut TaskTestContext) {
        let id = ctx.tasks.add("jump").unwrap();

        let done = ctx.tasks.mark(id, TaskStatus::Done).unwrap();
        assert_eq!(done.status, TaskStatus::Done);

        ctx.tasks.clock().advance(Duration::minutes(1));
        let reopened = ctx.tasks.mark(id, TaskStatus::InProgress).unwrap();
        assert_eq!(reopened.status, TaskStatus::InProgress);
        assert!(reopened.updated_at >= done.updated_at);
        assert_eq!(reopened.created_at, done.created_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_mark_todo_is_invalid_input(ctx: &mut TaskTestContext) {
        let id = ctx.tasks.add("x").unwrap();
        assert_eq!(ctx.tasks.mark(id, TaskStatus::Todo).unwrap_err().kind(), ErrorKind::InvalidInput);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_mark_missing_task(ctx: &mut TaskTestContext) {
        assert!(matches!(ctx.tasks.mark(3, TaskStatus::Done), Err(TaskError::TaskNotFound(3))));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_updated_at_never_precedes_created_at(ctx: &mut TaskTestContext) {
        let id = ctx.tasks.add("time travel").unwrap();
        ctx.tasks.clock().set(start_time() - Duration::days(1));

        let task = ctx.tasks.mark(id, TaskStatus::Done).unwrap();
        assert_eq!(task.updated_at, task.created_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_list_filters_by_status_in_order(ctx: &mut TaskTestContext) {
        for d in ["a", "b", "c", "d"] {
            ctx.tasks.add(d).unwrap();
        }
        ctx.tasks.mark(1, TaskStatus::Done).unwrap();
        ctx.tasks.mark(2, TaskStatus::InProgress).unwrap();
        ctx.tasks.mark(4, TaskStatus::Done).unwrap();

        let done: Vec<u32> = ctx.tasks.list(Some("done")).unwrap().iter().map(|t| t.id).collect();
        assert_eq!(done, vec![1, 4]);
        let todo: Vec<u32> = ctx.tasks.list(Some("todo")).unwrap().iter().map(|t| t.id).collect();
        assert_eq!(todo, vec![3]);
        let all: Vec<u32> = ctx.tasks.list(None).unwrap().iter().map(|t| t.id).collect();
        assert_eq!(all, vec![1, 2, 3, 4]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_list_unknown_status_is_empty_not_error(ctx: &mut TaskTestContext) {
        ctx.tasks.add("a").unwrap();
        assert!(ctx.tasks.list(Some("archived")).unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_list_does_not_write(ctx: &mut TaskTestContext) {
        ctx.tasks.add("a").unwrap();
        let before = ctx.file_contents();
        ctx.tasks.list(Some("done")).unwrap();
        ctx.tasks.list(None).unwrap();
        assert_eq!(ctx.file_contents(), before);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_operations_report_missing_store(ctx: &mut TaskTestContext) {
        fs::remove_file(ctx.tasks.store().path()).unwrap();

        assert!(matches!(ctx.tasks.add("x"), Err(TaskError::StoreNotFound(_))));
        assert_eq!(ctx.tasks.list(None).unwrap_err().kind(), ErrorKind::NotFound);
        assert!(!ctx.tasks.store().path().exists());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_operations_report_corrupt_store(ctx: &mut TaskTestContext) {
        fs::write(ctx.tasks.store().path(), "{\"tasks\": []}").unwrap();

        assert_eq!(ctx.tasks.add("x").unwrap_err().kind(), ErrorKind::Corrupt);
        assert_eq!(ctx.tasks.delete(1).unwrap_err().kind(), ErrorKind::Corrupt);
        assert_eq!(ctx.file_contents(), "{\"tasks\": []}");
    }
}
