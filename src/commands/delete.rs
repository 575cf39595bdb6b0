use crate::libs::clock::Clock;
use crate::libs::messages::Message;
use crate::libs::task::parse_task_id;
use crate::libs::tasks::Tasks;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    #[arg(value_parser = parse_task_id)]
    id: u32,
}

pub fn cmd<C: Clock>(args: DeleteArgs, tasks: &Tasks<C>) -> Result<()> {
    match tasks.delete(args.id) {
        Ok(task) => msg_success!(Message::TaskDeleted(task.id)),
        Err(e) => msg_error!(e),
    }

    Ok(())
}
