use crate::libs::clock::Clock;
use crate::libs::messages::Message;
use crate::libs::task::parse_task_id;
use crate::libs::tasks::Tasks;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// ID of the task to change
    #[arg(value_parser = parse_task_id)]
    id: u32,
    /// New description
    #[arg(required = true)]
    description: String,
}

pub fn cmd<C: Clock>(args: UpdateArgs, tasks: &Tasks<C>) -> Result<()> {
    match tasks.update(args.id, &args.description) {
        Ok(task) => msg_success!(Message::TaskUpdated(task.id)),
        Err(e) => msg_error!(e),
    }

    Ok(())
}
