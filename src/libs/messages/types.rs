use crate::libs::task::TaskStatus;

/// Every user-facing line the command layer prints.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(u32),
    TaskUpdated(u32),
    TaskDeleted(u32),
    TaskMarked(u32, TaskStatus),

    // === LIST MESSAGES ===
    NoTasksFound,
    NoTasksWithStatus(String),

    // === STORE MESSAGES ===
    TaskFileCreated(String),
    UsingTaskFile(String),
    TasksLoaded(usize, String), // count, path
    TasksSaved(usize, String),  // count, path

    // === DEBUG MESSAGES ===
    TaskStatusChanged(u32, TaskStatus, TaskStatus), // id, from, to
}
