//! Task creation command.

use crate::{
    db::tasks::Tasks,
    libs::{
        messages::Message,
        task::{NewTask, Priority, Status, TaskError},
        view::View,
    },
    msg_error, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    title: String,
    /// Longer description of the task
    #[arg(short, long, default_value = "")]
    description: String,
    /// Due date in YYYY-MM-DD form, today or later
    #[arg(short = 'u', long = "due")]
    due: NaiveDate,
    /// Task priority (high, medium or low)
    #[arg(short, long, default_value = "medium")]
    priority: Priority,
    /// Initial status (pending, in_progress or done)
    #[arg(short, long, default_value = "pending")]
    status: Status,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let new = NewTask {
        title: args.title,
        description: args.description,
        due_date: args.due,
        priority: args.priority,
        status: args.status,
    };

    match tasks.create(new) {
        Ok(task) => {
            msg_success!(Message::TaskCreated(task.id));
            View::tasks(&[task])?;
        }
        Err(err @ (TaskError::EmptyTitle | TaskError::DueDateInPast(_))) => {
            msg_error!(Message::TaskRejected(err.to_string()));
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
