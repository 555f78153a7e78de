//! Task filtering command.
//!
//! Exactly one criterion is applied per invocation; when several are given
//! the most specific one wins in the order status, priority, due date.

use crate::{
    db::tasks::Tasks,
    libs::{
        messages::Message,
        task::{Priority, Status},
        view::View,
    },
    msg_error, msg_info, msg_print,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Keep tasks with this status (pending, in_progress or done)
    #[arg(short, long)]
    status: Option<Status>,
    /// Keep tasks with this priority (high, medium or low)
    #[arg(short, long)]
    priority: Option<Priority>,
    /// Keep tasks due exactly on this date (YYYY-MM-DD)
    #[arg(short = 'u', long = "due")]
    due: Option<NaiveDate>,
}

pub fn cmd(args: FilterArgs) -> Result<()> {
    let tasks = Tasks::new()?;

    let filtered = if let Some(status) = args.status {
        tasks.filter_by_status(status)
    } else if let Some(priority) = args.priority {
        tasks.filter_by_priority(priority)
    } else if let Some(due) = args.due {
        tasks.filter_by_due_date(due)
    } else {
        msg_error!(Message::NoFilterProvided);
        return Ok(());
    };

    if filtered.is_empty() {
        msg_info!(Message::NoMatchingTasks);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&filtered)?;
    Ok(())
}
