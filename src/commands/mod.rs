//! Command-line surface of the task tracker.
//!
//! One subcommand per task operation. Every subcommand prints exactly one
//! line (or one table for `list`) and returns normally, including when the
//! operation itself fails: errors are reported, never propagated as a
//! process failure.

pub mod add;
pub mod delete;
pub mod list;
pub mod mark;
pub mod update;

use crate::libs::clock::{Clock, SystemClock};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::TaskStatus;
use crate::libs::tasks::Tasks;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new task", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "List tasks, optionally filtered by status")]
    List(list::ListArgs),
    #[command(about = "Change the description of a task", arg_required_else_help = true)]
    Update(update::UpdateArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Mark a task as in progress", arg_required_else_help = true)]
    MarkInProgress(mark::MarkArgs),
    #[command(about = "Mark a task as done", arg_required_else_help = true)]
    MarkDone(mark::MarkArgs),
}

#[derive(Debug, Parser)]
#[command(name = "task-cli", author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Path of the JSON task file [default: tasks.json]
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    /// Resolves the task file, makes sure it exists and dispatches the
    /// subcommand against it using the wall clock.
    pub fn run(self) -> Result<()> {
        let config = Config::resolve(self.file.clone());
        let store = config.store();
        msg_debug!(Message::UsingTaskFile(store.path().display().to_string()));

        if let Err(e) = store.initialize() {
            msg_error!(e);
            return Ok(());
        }

        self.dispatch(&Tasks::new(store, SystemClock))
    }

    fn dispatch<C: Clock>(self, tasks: &Tasks<C>) -> Result<()> {
        match self.command {
            Commands::Add(args) => add::cmd(args, tasks),
            Commands::List(args) => list::cmd(args, tasks),
            Commands::Update(args) => update::cmd(args, tasks),
            Commands::Delete(args) => delete::cmd(args, tasks),
            Commands::MarkInProgress(args) => mark::cmd(args, TaskStatus::InProgress, tasks),
            Commands::MarkDone(args) => mark::cmd(args, TaskStatus::Done, tasks),
        }
    }
}
