//! Durable JSON store for the task collection.
//!
//! The whole collection lives in a single pretty-printed JSON array and is
//! rewritten in full on every save. The store also owns the id counter:
//! [`TaskStore::load`] recovers it from the highest id found on disk and
//! [`TaskStore::allocate_id`] hands out strictly increasing ids from there,
//! so ids are never reused within a process even after deletions.
//!
//! Load failures never abort startup. A missing file simply means "no tasks
//! yet"; an unreadable or malformed file is reported and treated as empty.

use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::task::{Task, TaskError};
use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Task file name used when no override is configured.
pub const TASKS_FILE_NAME: &str = "tasks.json";

pub struct TaskStore {
    path: PathBuf,
    next_id: i32,
}

impl TaskStore {
    /// Opens the store at the configured location.
    ///
    /// The path comes from the `data_file` configuration override when set,
    /// otherwise from the platform application-data directory.
    pub fn new() -> Result<Self> {
        let path = match Config::read()?.data_file {
            Some(path) => path,
            None => DataStorage::new().get_path(TASKS_FILE_NAME)?,
        };
        Ok(Self::with_path(path))
    }

    /// Opens the store over an explicit file, bypassing configuration.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            next_id: 1,
        }
    }

    /// Reads the full task collection from disk.
    ///
    /// Recomputes the next-id counter as `max(ids) + 1`, or `1` for an empty
    /// collection. Never fails: unreadable and malformed files degrade to an
    /// empty collection with a warning, a missing file is silently empty.
    pub fn load(&mut self) -> Vec<Task> {
        let tasks = match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str::<Vec<Task>>(&contents) {
                Ok(tasks) => tasks,
                Err(err) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        %err,
                        "task file is malformed, starting with an empty collection"
                    );
                    Vec::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %err,
                    "task file could not be read, starting with an empty collection"
                );
                Vec::new()
            }
        };

        self.next_id = tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1;
        tracing::debug!(count = tasks.len(), next_id = self.next_id, "loaded task collection");
        tasks
    }

    /// Overwrites the task file with the full collection, pretty-printed.
    pub fn save_all(&self, tasks: &[Task]) -> Result<(), TaskError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let contents = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, contents)?;
        tracing::debug!(path = %self.path.display(), count = tasks.len(), "saved task collection");
        Ok(())
    }

    /// Hands out the next task id.
    pub fn allocate_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
