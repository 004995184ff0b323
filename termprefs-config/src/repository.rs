//! Settings repository trait and the in-memory implementation.

use crate::terminal_settings::TerminalSettings;
use parking_lot::Mutex;

/// Source and sink of [`TerminalSettings`].
///
/// One repository is shared by every pane of an options dialog, so
/// implementations hand out an independent copy on every `get_settings`
/// call and never keep a reference to what `set_settings` received.
pub trait SettingsRepository: Send + Sync {
    /// Fetch a fresh, independently owned snapshot
    fn get_settings(&self) -> anyhow::Result<TerminalSettings>;

    /// Persist the given snapshot as a whole
    fn set_settings(&self, settings: TerminalSettings) -> anyhow::Result<()>;
}

/// Repository that keeps the settings in memory only.
#[derive(Debug, Default)]
pub struct MemorySettingsRepository {
    settings: Mutex<TerminalSettings>,
}

impl MemorySettingsRepository {
    /// Create a repository seeded with `settings`
    pub fn new(settings: TerminalSettings) -> Self {
        Self {
            settings: Mutex::new(settings),
        }
    }
}

impl SettingsRepository for MemorySettingsRepository {
    fn get_settings(&self) -> anyhow::Result<TerminalSettings> {
        Ok(self.settings.lock().clone())
    }

    fn set_settings(&self, settings: TerminalSettings) -> anyhow::Result<()> {
        *self.settings.lock() = settings;
        Ok(())
    }
}
