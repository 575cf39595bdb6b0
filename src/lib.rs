//! # Task Tracker
//!
//! A command-line utility for keeping a personal task list in a local JSON
//! file.
//!
//! ## Features
//!
//! - **Task Management**: Add, update, delete and list tasks
//! - **Status Tracking**: Mark tasks as in progress or done
//! - **Filtering**: List only the tasks with a given status
//! - **Plain Storage**: One human-readable JSON file, rewritten whole on every change
//!
//! ## Usage
//!
//! ```rust,no_run
//! use task_tracker::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
