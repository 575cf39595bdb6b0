use crate::libs::clock::Clock;
use crate::libs::messages::Message;
use crate::libs::task::{parse_task_id, TaskStatus};
use crate::libs::tasks::Tasks;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

/// Shared by `mark-in-progress` and `mark-done`; the target status comes
/// from the subcommand name.
#[derive(Debug, Args)]
pub struct MarkArgs {
    /// ID of the task to mark
    #[arg(value_parser = parse_task_id)]
    id: u32,
}

pub fn cmd<C: Clock>(args: MarkArgs, status: TaskStatus, tasks: &Tasks<C>) -> Result<()> {
    match tasks.mark(args.id, status) {
        Ok(task) => msg_success!(Message::TaskMarked(task.id, task.status)),
        Err(e) => msg_error!(e),
    }

    Ok(())
}
