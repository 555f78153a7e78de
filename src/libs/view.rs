use crate::libs::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

/// Widest description shown in the table before truncation.
const DESCRIPTION_WIDTH: usize = 28;

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "STATUS", "PRIORITY", "DUE DATE", "DESCRIPTION"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.status,
                task.priority,
                task.due_date,
                truncate(&task.description, DESCRIPTION_WIDTH)
            ]);
        }
        table.printstd();

        Ok(())
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
