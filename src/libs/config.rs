//! Application configuration.
//!
//! The configuration is a small JSON file in the platform application-data
//! directory. Its single concern is an optional override for the location of
//! the task file; everything else in tasko works without any setup.
//!
//! A missing configuration file is not an error, it simply means defaults.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Overrides the default location of the task file.
    ///
    /// When unset, tasks live in `tasks.json` under the application-data
    /// directory resolved by [`DataStorage`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// Reads the configuration, falling back to defaults when no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file, returning to defaults.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Interactive setup prompting for the task file location.
    ///
    /// An empty answer keeps the default location.
    pub fn init() -> Result<Self> {
        let config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let current = config
            .data_file
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_default();
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDataFile.to_string())
            .default(current)
            .allow_empty(true)
            .interact_text()?;

        let data_file = if answer.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(answer.trim()))
        };

        Ok(Config { data_file })
    }
}
