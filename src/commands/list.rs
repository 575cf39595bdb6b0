use crate::libs::clock::Clock;
use crate::libs::messages::Message;
use crate::libs::task::TaskStatus;
use crate::libs::tasks::Tasks;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show tasks with this status (todo, in-progress, done)
    status: Option<String>,
}

pub fn cmd<C: Clock>(args: ListArgs, tasks: &Tasks<C>) -> Result<()> {
    let found = match tasks.list(args.status.as_deref()) {
        Ok(found) => found,
        Err(e) => {
            msg_error!(e);
            return Ok(());
        }
    };

    if !found.is_empty() {
        View::tasks(&found);
        return Ok(());
    }

    match args.status {
        None => msg_info!(Message::NoTasksFound),
        // A status nobody can have is still just an empty result, but say so.
        Some(status) if status.parse::<TaskStatus>().is_err() => msg_warning!(Message::NoTasksWithStatus(status)),
        Some(status) => msg_info!(Message::NoTasksWithStatus(status)),
    }

    Ok(())
}
