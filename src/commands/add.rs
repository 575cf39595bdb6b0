use crate::libs::clock::Clock;
use crate::libs::messages::Message;
use crate::libs::tasks::Tasks;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Description of the new task
    #[arg(required = true)]
    description: String,
}

pub fn cmd<C: Clock>(args: AddArgs, tasks: &Tasks<C>) -> Result<()> {
    match tasks.add(&args.description) {
        Ok(id) => msg_success!(Message::TaskAdded(id)),
        Err(e) => msg_error!(e),
    }

    Ok(())
}
