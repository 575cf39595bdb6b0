//! Display implementation for task tracker messages.
//!
//! All user-facing text is defined here, in one match, so that the wording of
//! confirmations and notices stays consistent across commands. Error text
//! lives on [`TaskError`](crate::libs::error::TaskError) itself and is printed
//! through the same `msg_error!` macro.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(id) => format!("Task added successfully (ID: {})", id),
            Message::TaskUpdated(id) => format!("Task {} updated successfully.", id),
            Message::TaskDeleted(id) => format!("Task {} deleted successfully.", id),
            Message::TaskMarked(id, status) => format!("Task {} marked as {}.", id, status),

            // === LIST MESSAGES ===
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::NoTasksWithStatus(status) => format!("No tasks found with status '{}'.", status),

            // === STORE MESSAGES ===
            Message::TaskFileCreated(path) => format!("Created empty task file at {}", path),
            Message::UsingTaskFile(path) => format!("Using task file {}", path),
            Message::TasksLoaded(count, path) => format!("Loaded {} task(s) from {}", count, path),
            Message::TasksSaved(count, path) => format!("Saved {} task(s) to {}", count, path),

            // === DEBUG MESSAGES ===
            Message::TaskStatusChanged(id, from, to) => format!("Task {} status: {} -> {}", id, from, to),
        };
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::TaskStatus;

    #[test]
    fn test_task_confirmations() {
        assert_eq!(Message::TaskAdded(1).to_string(), "Task added successfully (ID: 1)");
        assert_eq!(Message::TaskUpdated(4).to_string(), "Task 4 updated successfully.");
        assert_eq!(Message::TaskDeleted(2).to_string(), "Task 2 deleted successfully.");
        assert_eq!(Message::TaskMarked(3, TaskStatus::InProgress).to_string(), "Task 3 marked as in-progress.");
    }

    #[test]
    fn test_list_notices() {
        assert_eq!(Message::NoTasksFound.to_string(), "No tasks found.");
        assert_eq!(Message::NoTasksWithStatus("archived".into()).to_string(), "No tasks found with status 'archived'.");
    }

    #[test]
    fn test_store_diagnostics() {
        assert_eq!(Message::TaskFileCreated("tasks.json".into()).to_string(), "Created empty task file at tasks.json");
        assert_eq!(Message::TasksLoaded(2, "tasks.json".into()).to_string(), "Loaded 2 task(s) from tasks.json");
        assert_eq!(Message::TasksSaved(0, "tasks.json".into()).to_string(), "Saved 0 task(s) to tasks.json");
        assert_eq!(
            Message::TaskStatusChanged(5, TaskStatus::Todo, TaskStatus::Done).to_string(),
            "Task 5 status: todo -> done"
        );
    }
}
