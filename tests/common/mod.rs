//! Shared integration test helpers for termprefs.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{RecordingRepository, FailingRepository};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a
//! subset of helpers are used per file.

#![allow(dead_code)]

use parking_lot::Mutex;
use std::path::PathBuf;
use tempfile::TempDir;
use termprefs::config::{SettingsRepository, TerminalSettings};

/// Repository that records every call made to it.
#[derive(Debug, Default)]
pub struct RecordingRepository {
    stored: Mutex<TerminalSettings>,
    pub get_calls: Mutex<usize>,
    pub set_calls: Mutex<Vec<TerminalSettings>>,
}

impl RecordingRepository {
    pub fn new(settings: TerminalSettings) -> Self {
        Self {
            stored: Mutex::new(settings),
            ..Self::default()
        }
    }

    pub fn get_count(&self) -> usize {
        *self.get_calls.lock()
    }

    pub fn set_history(&self) -> Vec<TerminalSettings> {
        self.set_calls.lock().clone()
    }

    /// Change the stored settings behind the pane's back
    pub fn replace(&self, settings: TerminalSettings) {
        *self.stored.lock() = settings;
    }
}

impl SettingsRepository for RecordingRepository {
    fn get_settings(&self) -> anyhow::Result<TerminalSettings> {
        *self.get_calls.lock() += 1;
        Ok(self.stored.lock().clone())
    }

    fn set_settings(&self, settings: TerminalSettings) -> anyhow::Result<()> {
        self.set_calls.lock().push(settings.clone());
        *self.stored.lock() = settings;
        Ok(())
    }
}

/// Repository whose `set_settings` fails until `heal` is called.
#[derive(Debug, Default)]
pub struct FailingRepository {
    stored: Mutex<TerminalSettings>,
    healed: Mutex<bool>,
    pub failed_sets: Mutex<usize>,
}

impl FailingRepository {
    pub fn new(settings: TerminalSettings) -> Self {
        Self {
            stored: Mutex::new(settings),
            ..Self::default()
        }
    }

    pub fn heal(&self) {
        *self.healed.lock() = true;
    }

    pub fn stored(&self) -> TerminalSettings {
        self.stored.lock().clone()
    }
}

impl SettingsRepository for FailingRepository {
    fn get_settings(&self) -> anyhow::Result<TerminalSettings> {
        Ok(self.stored.lock().clone())
    }

    fn set_settings(&self, settings: TerminalSettings) -> anyhow::Result<()> {
        if !*self.healed.lock() {
            *self.failed_sets.lock() += 1;
            anyhow::bail!("settings store is read-only");
        }
        *self.stored.lock() = settings;
        Ok(())
    }
}

/// Repository that cannot even be read.
#[derive(Debug, Default)]
pub struct UnreadableRepository;

impl SettingsRepository for UnreadableRepository {
    fn get_settings(&self) -> anyhow::Result<TerminalSettings> {
        anyhow::bail!("settings store unavailable")
    }

    fn set_settings(&self, _settings: TerminalSettings) -> anyhow::Result<()> {
        anyhow::bail!("settings store unavailable")
    }
}

/// Repository that serves one snapshot and then fails every read.
#[derive(Debug, Default)]
pub struct ReadOnceRepository {
    stored: Mutex<TerminalSettings>,
    get_calls: Mutex<usize>,
    pub set_calls: Mutex<usize>,
}

impl SettingsRepository for ReadOnceRepository {
    fn get_settings(&self) -> anyhow::Result<TerminalSettings> {
        let mut calls = self.get_calls.lock();
        *calls += 1;
        if *calls > 1 {
            anyhow::bail!("settings store went away");
        }
        Ok(self.stored.lock().clone())
    }

    fn set_settings(&self, settings: TerminalSettings) -> anyhow::Result<()> {
        *self.set_calls.lock() += 1;
        *self.stored.lock() = settings;
        Ok(())
    }
}

/// Settings with Ctrl+C/V off and every other toggle on.
pub fn ctrl_cv_disabled() -> TerminalSettings {
    TerminalSettings {
        copy_paste_using_ctrl_c_v: false,
        copy_paste_using_shift_insert_ctrl_insert: true,
        select_all_using_ctrl_a: true,
        select_using_shift_arrow: true,
        quote_conversion_on_paste: true,
        navigation_using_ctrl_arrow: true,
        ..TerminalSettings::default()
    }
}

/// A temp dir and the settings file path inside it.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn settings_file_in_tmp_dir() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("terminal.yaml");
    (path, temp_dir)
}
