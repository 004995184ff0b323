//! Typed error variants for the termprefs-config crate.
//!
//! Repositories return `anyhow::Result` at the trait seam; the values they
//! produce are `ConfigError`s, so callers that care about the failure mode
//! can downcast instead of matching on strings.
//!
//! # Example
//!
//! ```rust,no_run
//! use termprefs_config::ConfigError;
//!
//! fn describe(e: &anyhow::Error) {
//!     if let Some(cfg_err) = e.downcast_ref::<ConfigError>() {
//!         match cfg_err {
//!             ConfigError::Io(io) => eprintln!("I/O error: {io}"),
//!             ConfigError::Parse(p) => eprintln!("YAML parse error: {p}"),
//!             ConfigError::Serialize(s) => eprintln!("YAML write error: {s}"),
//!         }
//!     }
//! }
//! ```

use std::fmt;

/// Errors that can occur when loading or saving terminal settings.
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the settings file.
    Io(std::io::Error),

    /// The settings file contained YAML that could not be parsed.
    Parse(serde_yaml_ng::Error),

    /// The settings could not be serialized back to YAML.
    Serialize(serde_yaml_ng::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error accessing settings: {e}"),
            ConfigError::Parse(e) => write!(f, "YAML parse error in settings: {e}"),
            ConfigError::Serialize(e) => write!(f, "Failed to serialize settings: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) | ConfigError::Serialize(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
