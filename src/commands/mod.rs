pub mod add;
pub mod delete;
pub mod edit;
pub mod filter;
pub mod init;
pub mod list;
pub mod search;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create a new task")]
    Add(add::AddArgs),
    #[command(about = "List tasks, optionally sorted")]
    List(list::ListArgs),
    #[command(about = "Edit an existing task")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Filter tasks by status, priority or due date")]
    Filter(filter::FilterArgs),
    #[command(about = "Search tasks by keyword")]
    Search(search::SearchArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Filter(args) => filter::cmd(args),
            Commands::Search(args) => search::cmd(args),
        }
    }
}
