//! # Tasko - Task Organizer
//!
//! A command-line task manager for tracking work items with due dates,
//! priorities and statuses, persisted to a human-readable JSON file.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit and delete tasks with validation
//! - **Sorting**: List tasks by due date or priority
//! - **Filtering**: Narrow the list by status, priority or due date
//! - **Keyword Search**: Case-insensitive search over titles and descriptions
//! - **Durable Storage**: Every change is written through to a JSON file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasko::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
