//! Terminal options pane.
//!
//! Edits the six terminal interaction toggles. The pane copies the toggles
//! out of the repository when it is created and writes them back when the
//! host applies changes. It never keeps the repository's snapshot around:
//! other panes share the repository and may commit unrelated fields in the
//! meantime, so every read and write is a fresh round-trip.
//!
//! ## Sub-module layout
//!
//! | File | Contents |
//! |------|----------|
//! | `mod.rs` (this file) | `TerminalOptionsPane` view-model and its dirty-tracking |
//! | `properties.rs` | `TerminalPreferences`, `TerminalProperty`, `PropertyChanged` |
//! | `control.rs` | `TerminalOptionsControl`, the egui surface |

mod control;
mod properties;

pub use control::TerminalOptionsControl;
pub use properties::{PropertyChanged, TerminalPreferences, TerminalProperty};

use crate::observable::{PropertyObservers, SubscriptionId};
use crate::traits::{OptionsPane, PaneControl};
use std::sync::Arc;
use termprefs_config::{SettingsRepository, TerminalOption};

/// View-model behind the "Terminal" page of the options dialog.
pub struct TerminalOptionsPane {
    repository: Arc<dyn SettingsRepository>,
    preferences: TerminalPreferences,
    is_dirty: bool,
    observers: PropertyObservers<PropertyChanged>,
}

impl std::fmt::Debug for TerminalOptionsPane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalOptionsPane")
            .field("preferences", &self.preferences)
            .field("is_dirty", &self.is_dirty)
            .finish_non_exhaustive()
    }
}

impl TerminalOptionsPane {
    pub const TITLE: &'static str = "Terminal";

    /// Create the pane from the repository's current settings.
    ///
    /// Fails only if the repository cannot produce a snapshot.
    pub fn new(repository: Arc<dyn SettingsRepository>) -> anyhow::Result<Self> {
        let settings = repository.get_settings()?;
        let preferences = TerminalPreferences::from_settings(&settings);
        log::debug!("Terminal options pane loaded {:?}", preferences);

        Ok(Self {
            repository,
            preferences,
            is_dirty: false,
            observers: PropertyObservers::new(),
        })
    }

    /// Current values of all six toggles
    pub fn preferences(&self) -> TerminalPreferences {
        self.preferences
    }

    /// Read one toggle
    pub fn option(&self, option: TerminalOption) -> bool {
        self.preferences.get(option)
    }

    /// Write one toggle.
    ///
    /// Always marks the pane dirty, even when `value` equals the current
    /// value. Observers are told about `IsDirty` and then about the toggle,
    /// after both have been updated.
    pub fn set_option(&mut self, option: TerminalOption, value: bool) {
        self.is_dirty = true;
        self.preferences.set(option, value);
        self.raise_property_changed(TerminalProperty::IsDirty);
        self.raise_property_changed(TerminalProperty::Option(option));
    }

    pub fn is_copy_paste_using_ctrl_c_v_enabled(&self) -> bool {
        self.option(TerminalOption::CopyPasteUsingCtrlCV)
    }

    pub fn set_copy_paste_using_ctrl_c_v_enabled(&mut self, value: bool) {
        self.set_option(TerminalOption::CopyPasteUsingCtrlCV, value);
    }

    pub fn is_copy_paste_using_shift_insert_ctrl_insert_enabled(&self) -> bool {
        self.option(TerminalOption::CopyPasteUsingShiftInsertCtrlInsert)
    }

    pub fn set_copy_paste_using_shift_insert_ctrl_insert_enabled(&mut self, value: bool) {
        self.set_option(TerminalOption::CopyPasteUsingShiftInsertCtrlInsert, value);
    }

    pub fn is_select_all_using_ctrl_a_enabled(&self) -> bool {
        self.option(TerminalOption::SelectAllUsingCtrlA)
    }

    pub fn set_select_all_using_ctrl_a_enabled(&mut self, value: bool) {
        self.set_option(TerminalOption::SelectAllUsingCtrlA, value);
    }

    pub fn is_select_using_shift_arrow_enabled(&self) -> bool {
        self.option(TerminalOption::SelectUsingShiftArrow)
    }

    pub fn set_select_using_shift_arrow_enabled(&mut self, value: bool) {
        self.set_option(TerminalOption::SelectUsingShiftArrow, value);
    }

    pub fn is_quote_conversion_on_paste_enabled(&self) -> bool {
        self.option(TerminalOption::QuoteConversionOnPaste)
    }

    pub fn set_quote_conversion_on_paste_enabled(&mut self, value: bool) {
        self.set_option(TerminalOption::QuoteConversionOnPaste, value);
    }

    pub fn is_navigation_using_ctrl_arrow_enabled(&self) -> bool {
        self.option(TerminalOption::NavigationUsingCtrlArrow)
    }

    pub fn set_navigation_using_ctrl_arrow_enabled(&mut self, value: bool) {
        self.set_option(TerminalOption::NavigationUsingCtrlArrow, value);
    }

    /// Register a property-change observer
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&PropertyChanged) + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    /// Remove a property-change observer
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn raise_property_changed(&mut self, property: TerminalProperty) {
        let event = PropertyChanged {
            property,
            preferences: self.preferences,
            is_dirty: self.is_dirty,
        };
        self.observers.notify(&event);
    }
}

impl OptionsPane for TerminalOptionsPane {
    fn title(&self) -> &str {
        Self::TITLE
    }

    fn create_control(&mut self) -> Box<dyn PaneControl + '_> {
        Box::new(TerminalOptionsControl::new(self))
    }

    fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    fn set_dirty(&mut self, dirty: bool) {
        self.is_dirty = dirty;
        self.raise_property_changed(TerminalProperty::IsDirty);
    }

    fn apply_changes(&mut self) -> anyhow::Result<()> {
        assert!(
            self.is_dirty,
            "apply_changes called on a terminal options pane without pending changes"
        );

        // Fresh snapshot: another pane may have committed since we loaded.
        let mut settings = self.repository.get_settings()?;
        self.preferences.write_to(&mut settings);

        if let Err(e) = self.repository.set_settings(settings) {
            log::warn!("Failed to save terminal settings: {e:#}");
            return Err(e);
        }

        log::info!("Terminal settings saved: {:?}", self.preferences);
        self.set_dirty(false);
        Ok(())
    }
}
