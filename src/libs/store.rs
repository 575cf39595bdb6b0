//! Durable storage for the task collection.
//!
//! The whole collection lives in one JSON file holding an array of task
//! records. There are no partial updates: [`TaskStore::save`] always rewrites
//! the complete file in a single write, and [`TaskStore::load`] always reads
//! all of it back.
//!
//! ## File Layout
//!
//! ```text
//! [
//!     {
//!         "id": 1,
//!         "description": "buy milk",
//!         "status": "todo",
//!         "createdAt": "20-05-2024 14:00",
//!         "updatedAt": "20-05-2024 14:00"
//!     }
//! ]
//! ```
//!
//! ## Error Handling
//!
//! - **Missing file**: `load` reports [`TaskError::StoreNotFound`]
//! - **Wrong shape**: anything other than an array of complete task records is
//!   [`TaskError::Corrupt`]
//! - **Filesystem failure**: reported as [`TaskError::Io`] and never retried
//!
//! No locking is done. Two processes writing the same file at once can lose
//! one of the writes.

use super::error::{Result, TaskError};
use super::messages::Message;
use super::task::Task;
use crate::msg_debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Indentation used when writing the task file.
const INDENT: &[u8] = b"    ";

/// Handle to the task file at a fixed path.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file with an empty collection if nothing exists yet.
    ///
    /// Returns `true` when a file was created. An existing file is left
    /// untouched whatever it contains.
    pub fn initialize(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| TaskError::io(parent, e))?;
        }
        fs::write(&self.path, "[]").map_err(|e| TaskError::io(&self.path, e))?;

        msg_debug!(Message::TaskFileCreated(self.path.display().to_string()));
        Ok(true)
    }

    /// Reads the full collection, preserving stored order.
    pub fn load(&self) -> Result<Vec<Task>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(TaskError::StoreNotFound(self.path.clone())),
            Err(e) => return Err(TaskError::io(&self.path, e)),
        };

        let value: Value = serde_json::from_str(&text).map_err(|e| TaskError::corrupt(&self.path, format!("invalid JSON: {}", e)))?;
        let Value::Array(entries) = value else {
            return Err(TaskError::corrupt(&self.path, "expected an array of tasks"));
        };

        let mut seen = HashSet::with_capacity(entries.len());
        let mut tasks = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let task: Task = serde_json::from_value(entry).map_err(|e| TaskError::corrupt(&self.path, format!("entry {}: {}", index, e)))?;
            if task.id == 0 {
                return Err(TaskError::corrupt(&self.path, format!("entry {}: task ID must be positive", index)));
            }
            if !seen.insert(task.id) {
                return Err(TaskError::corrupt(&self.path, format!("duplicate task ID {}", task.id)));
            }
            tasks.push(task);
        }

        msg_debug!(Message::TasksLoaded(tasks.len(), self.path.display().to_string()));
        Ok(tasks)
    }

    /// Replaces the file contents with the given collection.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let bytes = to_pretty_json(tasks).map_err(|e| TaskError::io(&self.path, io::Error::other(e)))?;
        fs::write(&self.path, bytes).map_err(|e| TaskError::io(&self.path, e))?;

        msg_debug!(Message::TasksSaved(tasks.len(), self.path.display().to_string()));
        Ok(())
    }
}

fn to_pretty_json(tasks: &[Task]) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    tasks.serialize(&mut serializer)?;
    Ok(buf)
}
