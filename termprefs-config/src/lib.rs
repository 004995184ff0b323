//! Configuration system for termprefs.
//!
//! This crate owns the persisted terminal interaction preferences and the
//! repositories that load and store them. It includes:
//!
//! - The six terminal interaction options and their display metadata
//! - The `TerminalSettings` aggregate as written to disk
//! - The `SettingsRepository` trait shared by every options pane
//! - In-memory and YAML-file repository implementations

pub mod defaults;
pub mod error;
pub mod persistence;
pub mod repository;
pub mod terminal_settings;
mod types;

pub use error::ConfigError;
pub use persistence::YamlSettingsRepository;
pub use repository::{MemorySettingsRepository, SettingsRepository};
pub use terminal_settings::TerminalSettings;
pub use types::{ParseOptionError, TerminalOption};
