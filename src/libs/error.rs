//! Error types for the task store and task operations.
//!
//! Every failure the core can produce is a [`TaskError`]. The command layer
//! never lets one of these escape to the process boundary: it renders the
//! error as a single line through `msg_error!` and returns normally.
//!
//! [`ErrorKind`] collapses the variants into the four categories a user can
//! actually act on, which keeps tests and callers independent of the exact
//! variant layout.

use std::path::PathBuf;

/// Errors produced by [`TaskStore`](super::store::TaskStore) and
/// [`Tasks`](super::tasks::Tasks).
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// The store file does not exist.
    #[error("Task file not found: {}", .0.display())]
    StoreNotFound(PathBuf),

    /// No task with the given ID exists in the collection.
    #[error("Task with ID {0} not found.")]
    TaskNotFound(u32),

    /// The store file exists but does not hold an array of task records.
    #[error("Task file {} is corrupt: {reason}", .path.display())]
    Corrupt {
        /// Path of the offending file.
        path: PathBuf,
        /// What was wrong with its contents.
        reason: String,
    },

    /// A caller-supplied value was rejected before touching the store.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reading or writing the store file failed.
    #[error("Failed to access task file {}: {source}", .path.display())]
    Io {
        /// Path that could not be read or written.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
}

/// Coarse error categories reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Corrupt,
    InvalidInput,
    Io,
}

impl TaskError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TaskError::StoreNotFound(_) | TaskError::TaskNotFound(_) => ErrorKind::NotFound,
            TaskError::Corrupt { .. } => ErrorKind::Corrupt,
            TaskError::InvalidInput(_) => ErrorKind::InvalidInput,
            TaskError::Io { .. } => ErrorKind::Io,
        }
    }

    pub(crate) fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        TaskError::Corrupt {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TaskError::Io { path: path.into(), source }
    }
}

/// Result alias used throughout the task core.
pub type Result<T> = std::result::Result<T, TaskError>;
