//! Options dialog panes for termprefs.
//!
//! This crate provides the view-models behind the pages of an options
//! dialog, their egui surfaces, and a generic dialog host. Panes are
//! decoupled from the host through the [`OptionsPane`] trait and from
//! storage through [`termprefs_config::SettingsRepository`].

// Trait interfaces between panes and their host
mod traits;
pub use traits::{OptionsPane, PaneControl};

pub mod observable;
pub use observable::{PropertyObservers, SubscriptionId};

pub mod options_dialog;
pub use options_dialog::{OptionsDialog, OptionsDialogAction};

pub mod section;

pub mod terminal_pane;
pub use terminal_pane::{
    PropertyChanged, TerminalOptionsControl, TerminalOptionsPane, TerminalPreferences,
    TerminalProperty,
};

// Re-export types that pane consumers need
pub use termprefs_config::{self as config, SettingsRepository, TerminalOption};
