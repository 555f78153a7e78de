//! Display implementation for tasko application messages.
//!
//! All user-facing text lives in this single match so wording stays
//! consistent across commands and can be changed in one place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task #{} created successfully", id),
            Message::TaskUpdated(id) => format!("Task #{} updated successfully", id),
            Message::TaskDeleted(id) => format!("Task #{} deleted successfully", id),
            Message::TaskNotFound(id) => format!("No task found with id {}", id),
            Message::TaskRejected(reason) => format!("Task rejected: {}", reason),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::NoTasksFound => "No tasks yet. Create one with `tasko add`.".to_string(),
            Message::NoMatchingTasks => "No tasks matched the given criteria.".to_string(),
            Message::SearchResultsHeader(keyword) => format!("Tasks matching '{}':", keyword),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::InvalidSortCriterion(raw) => {
                format!("Unknown sort criterion '{}'. Tasks will be shown unsorted.", raw)
            }
            Message::NoFilterProvided => "Select a filter: --status, --priority or --due".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::PromptDataFile => "Path to the task file (leave empty for the default location)".to_string(),

            // === EDIT PROMPTS ===
            Message::EditingTask(title) => format!("Editing task '{}'", title),
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD)".to_string(),
            Message::SelectTaskPriority => "Priority".to_string(),
            Message::SelectTaskStatus => "Status".to_string(),
        };
        write!(f, "{}", text)
    }
}
