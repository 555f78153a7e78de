//! Keyword search command.
//!
//! A blank keyword deliberately returns the whole collection, mirroring the
//! "clear search" behavior front ends expect from the service.

use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Keyword matched case-insensitively against title and description
    #[arg(default_value = "")]
    keyword: String,
}

pub fn cmd(args: SearchArgs) -> Result<()> {
    let tasks = Tasks::new()?;
    let results = tasks.search_by_keyword(&args.keyword);

    if results.is_empty() {
        msg_info!(Message::NoMatchingTasks);
        return Ok(());
    }

    if args.keyword.trim().is_empty() {
        msg_print!(Message::TasksHeader, true);
    } else {
        msg_print!(Message::SearchResultsHeader(args.keyword), true);
    }
    View::tasks(&results)?;
    Ok(())
}
