//! Composition root.
//!
//! Builds the settings repository and the options panes and wires them
//! together by constructor injection. Nothing is discovered at runtime: a
//! new pane is added here.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use termprefs_config::{SettingsRepository, YamlSettingsRepository};
use termprefs_settings_ui::{OptionsDialog, TerminalOptionsPane};

/// Application state shared by every command
pub struct App {
    repository: Arc<dyn SettingsRepository>,
    settings_path: PathBuf,
}

impl App {
    /// Create an application backed by the YAML file at `settings_path`,
    /// or at the default location when `None`
    pub fn new(settings_path: Option<PathBuf>) -> Self {
        let settings_path = settings_path.unwrap_or_else(YamlSettingsRepository::default_path);
        log::info!("Settings path: {:?}", settings_path);
        let repository: Arc<dyn SettingsRepository> =
            Arc::new(YamlSettingsRepository::new(settings_path.clone()));
        Self {
            repository,
            settings_path,
        }
    }

    /// Create an application around an existing repository
    pub fn with_repository(repository: Arc<dyn SettingsRepository>) -> Self {
        Self {
            repository,
            settings_path: PathBuf::new(),
        }
    }

    /// Path of the settings file (empty for injected repositories)
    pub fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    /// Create a terminal options pane reading the shared repository
    pub fn terminal_pane(&self) -> Result<TerminalOptionsPane> {
        TerminalOptionsPane::new(Arc::clone(&self.repository))
            .context("Failed to load terminal settings")
    }

    /// Build the options dialog with every pane
    pub fn build_dialog(&self) -> Result<OptionsDialog> {
        let mut dialog = OptionsDialog::new();
        dialog.add_pane(Box::new(self.terminal_pane()?));
        Ok(dialog)
    }
}
