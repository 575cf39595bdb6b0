//! Core library modules for the task tracker.
//!
//! ## Features
//!
//! - **Task Store**: whole-file JSON persistence of the task collection
//! - **Task Operations**: add, list, update, delete and mark
//! - **Infrastructure**: configuration, clock, error types, messaging
//! - **User Interface**: timestamp formatting and table rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use task_tracker::libs::clock::SystemClock;
//! use task_tracker::libs::store::TaskStore;
//! use task_tracker::libs::tasks::Tasks;
//!
//! let store = TaskStore::new("tasks.json");
//! store.initialize()?;
//! let id = Tasks::new(store, SystemClock).add("buy milk")?;
//! # Ok::<(), task_tracker::libs::error::TaskError>(())
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod store;
pub mod task;
pub mod tasks;
pub mod view;
