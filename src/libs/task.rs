use super::error::TaskError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a task sits in its workflow.
///
/// Any status may follow any other; the tracker records where a task is,
/// not how it got there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TaskError::InvalidInput(format!("unknown status '{}', expected one of: todo, in-progress, done", s)))
    }
}

/// A single record in the task file.
///
/// Field names and order match the on-disk JSON layout. Records carry
/// exactly these five fields; anything extra is rejected rather than dropped
/// on the next save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Task {
    pub id: u32,
    pub description: String,
    pub status: TaskStatus,
    #[serde(with = "crate::libs::formatter::timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(with = "crate::libs::formatter::timestamp")]
    pub updated_at: NaiveDateTime,
}

impl Task {
    /// Creates a fresh `todo` task whose two timestamps are equal.
    pub fn new(id: u32, description: &str, now: NaiveDateTime) -> Self {
        Task {
            id,
            description: description.to_string(),
            status: TaskStatus::Todo,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refreshes `updated_at`, never letting it fall behind `created_at`.
    pub fn touch(&mut self, now: NaiveDateTime) {
        self.updated_at = now.max(self.created_at);
    }
}

/// Parses a task ID as given on the command line.
///
/// IDs are positive integers; `0`, negatives and non-numeric text are
/// rejected as invalid input.
pub fn parse_task_id(text: &str) -> Result<u32, TaskError> {
    match text.trim().parse::<u32>() {
        Ok(0) => Err(TaskError::InvalidInput("task ID must be a positive integer".to_string())),
        Ok(id) => Ok(id),
        Err(_) => Err(TaskError::InvalidInput(format!("'{}' is not a valid task ID", text))),
    }
}

/// Rejects descriptions that are empty once surrounding whitespace is gone.
pub fn validate_description(description: &str) -> Result<(), TaskError> {
    if description.trim().is_empty() {
        return Err(TaskError::InvalidInput("task description must not be empty".to_string()));
    }
    Ok(())
}
