//! Task service: the single owner of the in-memory collection and of every
//! business rule around it.
//!
//! The service mirrors the store at startup and treats memory as
//! authoritative from then on. Every mutation updates memory first and then
//! writes the full collection through to the store before returning. When a
//! write-through fails the mutation stands and the failure is returned to the
//! caller, so memory and disk may diverge until the next successful save.

use crate::db::store::TaskStore;
use crate::libs::task::{NewTask, Priority, SortBy, Status, Task, TaskError, TaskPatch};
use anyhow::Result;
use chrono::{Local, NaiveDate};

pub struct Tasks {
    store: TaskStore,
    tasks: Vec<Task>,
}

impl Tasks {
    /// Opens the service over the configured store and loads the collection.
    pub fn new() -> Result<Self> {
        Ok(Self::with_store(TaskStore::new()?))
    }

    /// Opens the service over an explicit store, loading its collection.
    pub fn with_store(mut store: TaskStore) -> Self {
        let tasks = store.load();
        Self { store, tasks }
    }

    /// Validates and creates a task, writing the collection through.
    ///
    /// Rejects a title that is empty after trimming and a due date before
    /// today. On success the task carries the next id from the store.
    pub fn create(&mut self, new: NewTask) -> Result<Task, TaskError> {
        let title = new.title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        if new.due_date < today() {
            return Err(TaskError::DueDateInPast(new.due_date));
        }

        let task = Task {
            id: self.store.allocate_id(),
            title: title.to_string(),
            description: new.description,
            due_date: new.due_date,
            priority: new.priority,
            status: new.status,
        };
        self.tasks.push(task.clone());
        tracing::debug!(id = task.id, "task created");
        self.store.save_all(&self.tasks)?;
        Ok(task)
    }

    /// Returns a copy of the full collection in insertion order.
    pub fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Returns a sorted copy of the collection.
    ///
    /// Sorting is stable, so ties keep their insertion order.
    pub fn list_sorted(&self, sort: SortBy) -> Vec<Task> {
        let mut tasks = self.tasks.clone();
        match sort {
            SortBy::None => {}
            SortBy::DueDate => tasks.sort_by_key(|task| task.due_date),
            SortBy::Priority => tasks.sort_by_key(|task| task.priority),
        }
        tasks
    }

    /// Applies a partial update to the task with the given id.
    ///
    /// Per-field rules: a supplied title is applied only when non-empty after
    /// trimming, a supplied due date only when it is today or later; both are
    /// silently skipped otherwise. Description, priority and status are
    /// applied whenever supplied. The collection is written through only when
    /// at least one field actually changed.
    pub fn update(&mut self, id: i32, patch: TaskPatch) -> Result<Task, TaskError> {
        let today = today();
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TaskError::NotFound(id))?;

        let mut changed = false;
        if let Some(title) = patch.title {
            let title = title.trim();
            if !title.is_empty() && title != task.title {
                task.title = title.to_string();
                changed = true;
            }
        }
        if let Some(description) = patch.description {
            if description != task.description {
                task.description = description;
                changed = true;
            }
        }
        if let Some(due_date) = patch.due_date {
            if due_date >= today && due_date != task.due_date {
                task.due_date = due_date;
                changed = true;
            }
        }
        if let Some(priority) = patch.priority {
            if priority != task.priority {
                task.priority = priority;
                changed = true;
            }
        }
        if let Some(status) = patch.status {
            if status != task.status {
                task.status = status;
                changed = true;
            }
        }

        let updated = task.clone();
        if changed {
            tracing::debug!(id, "task updated");
            self.store.save_all(&self.tasks)?;
        }
        Ok(updated)
    }

    /// Removes the task with the given id and writes the collection through.
    pub fn delete(&mut self, id: i32) -> Result<Task, TaskError> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(TaskError::NotFound(id))?;
        let removed = self.tasks.remove(index);
        tracing::debug!(id, "task deleted");
        self.store.save_all(&self.tasks)?;
        Ok(removed)
    }

    /// Tasks with exactly the given status, in insertion order.
    pub fn filter_by_status(&self, status: Status) -> Vec<Task> {
        self.tasks.iter().filter(|task| task.status == status).cloned().collect()
    }

    /// Tasks with exactly the given priority, in insertion order.
    pub fn filter_by_priority(&self, priority: Priority) -> Vec<Task> {
        self.tasks.iter().filter(|task| task.priority == priority).cloned().collect()
    }

    /// Tasks due exactly on the given date, in insertion order.
    pub fn filter_by_due_date(&self, due_date: NaiveDate) -> Vec<Task> {
        self.tasks.iter().filter(|task| task.due_date == due_date).cloned().collect()
    }

    /// Case-insensitive substring search over title and description.
    ///
    /// A blank keyword returns the entire collection; front ends rely on
    /// this as their "clear filter" affordance.
    pub fn search_by_keyword(&self, keyword: &str) -> Vec<Task> {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return self.list();
        }
        self.tasks
            .iter()
            .filter(|task| {
                task.title.to_lowercase().contains(&needle) || task.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
