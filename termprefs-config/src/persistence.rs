//! YAML file persistence for terminal settings.
//!
//! Covers:
//! - `YamlSettingsRepository` (read on every `get`, atomic write on every `set`)
//! - XDG-compliant path helpers (`default_path`, `config_dir`)

use crate::error::ConfigError;
use crate::repository::SettingsRepository;
use crate::terminal_settings::TerminalSettings;
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the settings file inside the config directory.
const SETTINGS_FILE_NAME: &str = "terminal.yaml";

/// Repository backed by a YAML file.
///
/// Nothing is cached: every `get_settings` re-reads the file and every
/// `set_settings` rewrites it, so panes sharing the repository always see
/// each other's committed changes.
#[derive(Debug)]
pub struct YamlSettingsRepository {
    path: PathBuf,
    /// Serializes file access between panes of the same process.
    io_lock: Mutex<()>,
}

impl YamlSettingsRepository {
    /// Create a repository reading and writing `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io_lock: Mutex::new(()),
        }
    }

    /// Create a repository at [`Self::default_path`]
    pub fn open_default() -> Self {
        Self::new(Self::default_path())
    }

    /// Path of the settings file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the default settings file path (using XDG convention)
    pub fn default_path() -> PathBuf {
        Self::config_dir().join(SETTINGS_FILE_NAME)
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("termprefs")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // ~/.config/termprefs on all Unix-like platforms, macOS included
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("termprefs")
            } else {
                PathBuf::from(".")
            }
        }
    }

    fn load(&self) -> Result<TerminalSettings, ConfigError> {
        if !self.path.exists() {
            log::info!(
                "Settings file {:?} not found, using defaults",
                self.path
            );
            return Ok(TerminalSettings::default());
        }

        let contents = fs::read_to_string(&self.path)?;
        let settings = serde_yaml_ng::from_str(&contents).map_err(ConfigError::Parse)?;
        log::debug!("Loaded terminal settings from {:?}", self.path);
        Ok(settings)
    }

    fn save(&self, settings: &TerminalSettings) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml_ng::to_string(settings).map_err(ConfigError::Serialize)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = self.path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        log::debug!("Saved terminal settings to {:?}", self.path);
        Ok(())
    }
}

impl SettingsRepository for YamlSettingsRepository {
    fn get_settings(&self) -> anyhow::Result<TerminalSettings> {
        let _guard = self.io_lock.lock();
        Ok(self.load()?)
    }

    fn set_settings(&self, settings: TerminalSettings) -> anyhow::Result<()> {
        let _guard = self.io_lock.lock();
        Ok(self.save(&settings)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo = YamlSettingsRepository::new(temp_dir.path().join("terminal.yaml"));

        let settings = repo.get_settings().expect("defaults expected");
        assert_eq!(settings, TerminalSettings::default());
        assert!(!repo.path().exists(), "reading must not create the file");
    }

    #[test]
    fn test_set_then_get_round_trips_through_disk() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested").join("terminal.yaml");
        let repo = YamlSettingsRepository::new(&path);

        let mut settings = TerminalSettings::default();
        settings.navigation_using_ctrl_arrow = true;
        settings.font_family = "Fira Code".to_string();
        repo.set_settings(settings.clone()).expect("save failed");

        assert!(path.exists());
        assert!(!path.with_extension("yaml.tmp").exists());

        let reopened = YamlSettingsRepository::new(&path);
        assert_eq!(reopened.get_settings().expect("load failed"), settings);
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("terminal.yaml");
        fs::write(&path, "select_all_using_ctrl_a: [not, a, bool]\n").unwrap();

        let err = YamlSettingsRepository::new(&path)
            .get_settings()
            .expect_err("parse should fail");
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_unwritable_location_is_io_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        // A regular file where the parent directory should be.
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let repo = YamlSettingsRepository::new(blocker.join("terminal.yaml"));
        let err = repo
            .set_settings(TerminalSettings::default())
            .expect_err("save should fail");
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_own_save_is_loaded_as_written() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("terminal.yaml");
        let repo = YamlSettingsRepository::new(&path);

        let mut settings = TerminalSettings::default();
        settings.select_all_using_ctrl_a = true;
        repo.set_settings(settings.clone()).expect("save failed");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        assert_eq!(repo.get_settings().expect("load failed"), settings);
    }

    #[test]
    fn test_default_path_file_name() {
        assert!(YamlSettingsRepository::default_path().ends_with("terminal.yaml"));
    }
}
