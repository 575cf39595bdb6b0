//! Runtime configuration for the task tracker.
//!
//! The only setting is where the task file lives. It is resolved once at the
//! entry point and then passed explicitly to the store, so nothing below
//! `main` depends on a global path.
//!
//! ## Resolution Order
//!
//! 1. **`--file <PATH>`** given on the command line
//! 2. **`TASK_TRACKER_FILE`** from the environment (a `.env` file in the
//!    working directory is loaded into the environment first)
//! 3. **`tasks.json`** in the current working directory
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use task_tracker::libs::config::Config;
//!
//! let config = Config::resolve(None);
//! let store = config.store();
//! store.initialize()?;
//! # Ok::<(), task_tracker::libs::error::TaskError>(())
//! ```

use super::store::TaskStore;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Task file used when nothing else is configured.
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Environment variable that overrides the task file location.
pub const TASKS_FILE_ENV: &str = "TASK_TRACKER_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Location of the JSON task file.
    pub tasks_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tasks_file: PathBuf::from(DEFAULT_TASKS_FILE),
        }
    }
}

impl Config {
    /// Resolves the configuration from the command line override and the
    /// process environment.
    pub fn resolve(cli_file: Option<PathBuf>) -> Config {
        Self::from_sources(cli_file, env::var_os(TASKS_FILE_ENV))
    }

    /// Picks the task file from explicit sources, highest priority first.
    ///
    /// Empty values are treated as unset so that `TASK_TRACKER_FILE=` in a
    /// `.env` file falls back to the default instead of an empty path.
    pub fn from_sources(cli_file: Option<PathBuf>, env_file: Option<OsString>) -> Config {
        let tasks_file = cli_file
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| env_file.filter(|value| !value.is_empty()).map(PathBuf::from));

        match tasks_file {
            Some(tasks_file) => Config { tasks_file },
            None => Config::default(),
        }
    }

    pub fn store(&self) -> TaskStore {
        TaskStore::new(&self.tasks_file)
    }
}
