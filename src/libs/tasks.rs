//! Task operations over the stored collection.
//!
//! Each operation follows the same cycle: load the collection from the
//! [`TaskStore`], change it in memory, and save it back only if something
//! actually changed. Reads (`list`) never write, and an operation that fails
//! validation or cannot find its task leaves the file untouched.
//!
//! ## ID Assignment
//!
//! New IDs are one more than the highest ID currently stored (or `1` for an
//! empty collection). Counting tasks instead would hand out an ID that is
//! still in use once anything has been deleted.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use task_tracker::libs::clock::SystemClock;
//! use task_tracker::libs::store::TaskStore;
//! use task_tracker::libs::tasks::Tasks;
//! use task_tracker::libs::task::TaskStatus;
//!
//! let tasks = Tasks::new(TaskStore::new("tasks.json"), SystemClock);
//! let id = tasks.add("buy milk")?;
//! tasks.mark(id, TaskStatus::Done)?;
//! # Ok::<(), task_tracker::libs::error::TaskError>(())
//! ```

use super::clock::Clock;
use super::error::{Result, TaskError};
use super::messages::Message;
use super::store::TaskStore;
use super::task::{validate_description, Task, TaskStatus};
use crate::msg_debug;

pub struct Tasks<C: Clock> {
    store: TaskStore,
    clock: C,
}

impl<C: Clock> Tasks<C> {
    pub fn new(store: TaskStore, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Appends a new `todo` task and returns its ID.
    pub fn add(&self, description: &str) -> Result<u32> {
        validate_description(description)?;

        let mut tasks = self.store.load()?;
        let id = next_id(&tasks)?;
        tasks.push(Task::new(id, description, self.clock.now()));
        self.store.save(&tasks)?;

        Ok(id)
    }

    /// Returns every task, or only those whose status text equals `status`.
    ///
    /// A filter naming no known status simply matches nothing.
    pub fn list(&self, status: Option<&str>) -> Result<Vec<Task>> {
        let tasks = self.store.load()?;
        Ok(match status {
            Some(filter) => tasks.into_iter().filter(|task| task.status.as_str() == filter).collect(),
            None => tasks,
        })
    }

    /// Replaces the description of an existing task.
    pub fn update(&self, id: u32, description: &str) -> Result<Task> {
        validate_description(description)?;

        let mut tasks = self.store.load()?;
        let task = find_mut(&mut tasks, id)?;
        task.description = description.to_string();
        task.touch(self.clock.now());
        let updated = task.clone();
        self.store.save(&tasks)?;

        Ok(updated)
    }

    /// Removes a task and returns it. The file is only rewritten when a task
    /// was actually removed.
    pub fn delete(&self, id: u32) -> Result<Task> {
        let mut tasks = self.store.load()?;
        let position = tasks.iter().position(|task| task.id == id).ok_or(TaskError::TaskNotFound(id))?;
        let removed = tasks.remove(position);
        self.store.save(&tasks)?;

        Ok(removed)
    }

    /// Moves a task to `in-progress` or `done`.
    ///
    /// Transitions are not ordered: `todo` may go straight to `done`, and a
    /// `done` task may be marked `in-progress` again.
    pub fn mark(&self, id: u32, status: TaskStatus) -> Result<Task> {
        if status == TaskStatus::Todo {
            return Err(TaskError::InvalidInput("tasks can only be marked in-progress or done".to_string()));
        }

        let mut tasks = self.store.load()?;
        let task = find_mut(&mut tasks, id)?;
        let previous = task.status;
        task.status = status;
        task.touch(self.clock.now());
        let marked = task.clone();
        self.store.save(&tasks)?;

        msg_debug!(Message::TaskStatusChanged(id, previous, status));
        Ok(marked)
    }
}

fn next_id(tasks: &[Task]) -> Result<u32> {
    match tasks.iter().map(|task| task.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or_else(|| TaskError::InvalidInput("no task IDs left".to_string())),
    }
}

fn find_mut(tasks: &mut [Task], id: u32) -> Result<&mut Task> {
    tasks.iter_mut().find(|task| task.id == id).ok_or(TaskError::TaskNotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(id: u32) -> Task {
        let at = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        Task::new(id, "x", at)
    }

    #[test]
    fn test_next_id_starts_at_one() {
        assert_eq!(next_id(&[]).unwrap(), 1);
    }

    #[test]
    fn test_next_id_uses_highest_not_count() {
        assert_eq!(next_id(&[task(1), task(3)]).unwrap(), 4);
        assert_eq!(next_id(&[task(7)]).unwrap(), 8);
    }

    #[test]
    fn test_next_id_does_not_overflow() {
        assert!(next_id(&[task(u32::MAX)]).is_err());
    }

    #[test]
    fn test_find_mut_reports_missing_id() {
        let mut tasks = vec![task(1), task(2)];
        assert!(matches!(find_mut(&mut tasks, 5), Err(TaskError::TaskNotFound(5))));
        assert_eq!(find_mut(&mut tasks, 2).unwrap().id, 2);
    }
}
