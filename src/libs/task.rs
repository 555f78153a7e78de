//! Task entity and the value types shared by the service and store layers.
//!
//! A [`Task`] is a plain record; all validation and mutation rules live in
//! the service (`crate::db::tasks::Tasks`). Callers describe new tasks with
//! [`NewTask`] and partial edits with [`TaskPatch`], where every field is an
//! `Option` so "absent" and "set to empty" stay distinguishable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single trackable unit of work.
///
/// Serialized as a JSON object with camelCase keys in declaration order
/// (`id`, `title`, `description`, `dueDate`, `priority`, `status`). Dates use
/// the ISO-8601 calendar form `YYYY-MM-DD`, enums their symbolic names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned by the store at creation and never reused.
    pub id: i32,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub status: Status,
}

/// Priority levels, declared highest first so that an ascending sort
/// puts `High` at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Task lifecycle states. Any state may be set from any other state;
/// the service deliberately does not enforce a transition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Pending,
    InProgress,
    Done,
}

/// Sort criteria accepted by `Tasks::list_sorted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Insertion order, no sorting applied.
    #[default]
    None,
    DueDate,
    Priority,
}

/// Caller input for creating a task. The id is allocated by the store.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub status: Status,
}

/// A partial update request. Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }
}

/// Failures of the task domain and its persistence.
///
/// Validation rejections and unknown ids are ordinary values for the caller
/// to report; the I/O variants surface write-through failures without rolling
/// back the in-memory state.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("title cannot be empty")]
    EmptyTitle,
    #[error("due date {0} is in the past, it must be today or later")]
    DueDateInPast(NaiveDate),
    #[error("no task found with id {0}")]
    NotFound(i32),
    #[error("failed to write the task file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode tasks as JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(format!("unknown priority '{}', expected high, medium or low", other)),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Pending => "PENDING",
            Status::InProgress => "IN_PROGRESS",
            Status::Done => "DONE",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "in_progress" | "in-progress" | "inprogress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            other => Err(format!("unknown status '{}', expected pending, in_progress or done", other)),
        }
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "" | "none" => Ok(SortBy::None),
            "due" | "date" | "due-date" | "due_date" => Ok(SortBy::DueDate),
            "priority" => Ok(SortBy::Priority),
            other => Err(format!("unknown sort criterion '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_task() -> Task {
        Task {
            id: 7,
            title: "Review release notes".to_string(),
            description: "Check the changelog draft".to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
            priority: Priority::High,
            status: Status::InProgress,
        }
    }

    #[test]
    fn test_serialization_contract() {
        let json = serde_json::to_string_pretty(&sample_task()).unwrap();
        assert!(json.contains("\"id\": 7"));
        assert!(json.contains("\"dueDate\": \"2025-05-10\""));
        assert!(json.contains("\"priority\": \"HIGH\""));
        assert!(json.contains("\"status\": \"IN_PROGRESS\""));
        // Keys must keep their declaration order for diffable files
        let id_pos = json.find("\"id\"").unwrap();
        let title_pos = json.find("\"title\"").unwrap();
        let status_pos = json.find("\"status\"").unwrap();
        assert!(id_pos < title_pos && title_pos < status_pos);
    }

    #[test]
    fn test_round_trip_equality() {
        let task = sample_task();
        let json = serde_json::to_string(&task).unwrap();
        let parsed: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, task);
    }

    #[test]
    fn test_priority_order_puts_high_first() {
        let mut priorities = vec![Priority::Low, Priority::High, Priority::Medium];
        priorities.sort();
        assert_eq!(priorities, vec![Priority::High, Priority::Medium, Priority::Low]);
    }

    #[test]
    fn test_enum_parsing_is_case_insensitive() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" low ".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!("In-Progress".parse::<Status>().unwrap(), Status::InProgress);
        assert!("urgent".parse::<Priority>().is_err());
        assert!("cancelled".parse::<Status>().is_err());
    }

    #[test]
    fn test_sort_criterion_parsing() {
        assert_eq!("due".parse::<SortBy>().unwrap(), SortBy::DueDate);
        assert_eq!("priority".parse::<SortBy>().unwrap(), SortBy::Priority);
        assert_eq!("".parse::<SortBy>().unwrap(), SortBy::None);
        assert!("alphabetical".parse::<SortBy>().is_err());
    }

    #[test]
    fn test_empty_patch() {
        assert!(TaskPatch::default().is_empty());
        let patch = TaskPatch {
            status: Some(Status::Done),
            ..TaskPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
