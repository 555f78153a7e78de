//! Task deletion command with confirmation.

use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, task::TaskError, view::View},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Id of the task to delete
    id: i32,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let target = match tasks.list().into_iter().find(|task| task.id == args.id) {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFound(args.id));
            return Ok(());
        }
    };

    if !args.yes {
        View::tasks(&[target.clone()])?;
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(target.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    match tasks.delete(args.id) {
        Ok(task) => msg_success!(Message::TaskDeleted(task.id)),
        Err(TaskError::NotFound(id)) => msg_error!(Message::TaskNotFound(id)),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
