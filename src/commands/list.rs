//! Task listing command with optional sorting.

use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, task::SortBy, view::View},
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Sort criterion: none, due or priority
    #[arg(short, long, default_value = "none")]
    sort: String,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    // An unknown criterion is not fatal, the list is shown unsorted instead
    let sort = match args.sort.parse::<SortBy>() {
        Ok(sort) => sort,
        Err(_) => {
            msg_warning!(Message::InvalidSortCriterion(args.sort));
            SortBy::None
        }
    };

    let tasks = Tasks::new()?;
    let listed = tasks.list_sorted(sort);

    if listed.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&listed)?;
    Ok(())
}
