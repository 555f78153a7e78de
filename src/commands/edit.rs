//! Task editing command.
//!
//! Flags edit single fields directly; without any field flag the command
//! walks through the fields interactively, pre-filled with current values.
//! The service applies the per-field rules, so a past due date or an empty
//! title supplied here simply leaves that field unchanged.

use crate::{
    db::tasks::Tasks,
    libs::{
        messages::Message,
        task::{Priority, Status, Task, TaskError, TaskPatch},
        view::View,
    },
    msg_error, msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Id of the task to edit
    id: i32,
    /// New title, kept unchanged when empty
    #[arg(short, long)]
    title: Option<String>,
    /// New description
    #[arg(short, long)]
    description: Option<String>,
    /// New due date in YYYY-MM-DD form, ignored when in the past
    #[arg(short = 'u', long = "due")]
    due: Option<NaiveDate>,
    /// New priority (high, medium or low)
    #[arg(short, long)]
    priority: Option<Priority>,
    /// New status (pending, in_progress or done)
    #[arg(short, long)]
    status: Option<Status>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let mut patch = TaskPatch {
        title: args.title,
        description: args.description,
        due_date: args.due,
        priority: args.priority,
        status: args.status,
    };

    if patch.is_empty() {
        let current = match tasks.list().into_iter().find(|task| task.id == args.id) {
            Some(task) => task,
            None => {
                msg_error!(Message::TaskNotFound(args.id));
                return Ok(());
            }
        };
        patch = prompt_patch(&current)?;
    }

    match tasks.update(args.id, patch) {
        Ok(task) => {
            msg_success!(Message::TaskUpdated(task.id));
            View::tasks(&[task])?;
        }
        Err(TaskError::NotFound(id)) => msg_error!(Message::TaskNotFound(id)),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

/// Collects a full patch interactively, defaulting every field to its
/// current value so that plain Enter leaves it unchanged.
fn prompt_patch(current: &Task) -> Result<TaskPatch> {
    msg_print!(Message::EditingTask(current.title.clone()), true);
    let theme = ColorfulTheme::default();

    let title: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(current.title.clone())
        .interact_text()?;

    let description: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(current.description.clone())
        .allow_empty(true)
        .interact_text()?;

    let due_raw: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .default(current.due_date.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            input.parse::<NaiveDate>().map(|_| ()).map_err(|err| err.to_string())
        })
        .interact_text()?;
    let due_date = due_raw.parse::<NaiveDate>().unwrap_or(current.due_date);

    let priorities = [Priority::High, Priority::Medium, Priority::Low];
    let labels: Vec<String> = priorities.iter().map(|priority| priority.to_string()).collect();
    let selected = Select::with_theme(&theme)
        .with_prompt(Message::SelectTaskPriority.to_string())
        .items(&labels)
        .default(priorities.iter().position(|p| *p == current.priority).unwrap_or(0))
        .interact()?;
    let priority = priorities[selected];

    let statuses = [Status::Pending, Status::InProgress, Status::Done];
    let labels: Vec<String> = statuses.iter().map(|status| status.to_string()).collect();
    let selected = Select::with_theme(&theme)
        .with_prompt(Message::SelectTaskStatus.to_string())
        .items(&labels)
        .default(statuses.iter().position(|s| *s == current.status).unwrap_or(0))
        .interact()?;
    let status = statuses[selected];

    Ok(TaskPatch {
        title: Some(title),
        description: Some(description),
        due_date: Some(due_date),
        priority: Some(priority),
        status: Some(status),
    })
}
