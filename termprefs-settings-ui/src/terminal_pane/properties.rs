//! Observable state of the terminal options pane.

use termprefs_config::{TerminalOption, TerminalSettings};

/// The six terminal interaction toggles as cached by the pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalPreferences {
    pub copy_paste_using_ctrl_c_v: bool,
    pub copy_paste_using_shift_insert_ctrl_insert: bool,
    pub select_all_using_ctrl_a: bool,
    pub select_using_shift_arrow: bool,
    pub quote_conversion_on_paste: bool,
    pub navigation_using_ctrl_arrow: bool,
}

impl TerminalPreferences {
    /// Copy the toggles out of a repository snapshot
    pub fn from_settings(settings: &TerminalSettings) -> Self {
        Self {
            copy_paste_using_ctrl_c_v: settings.copy_paste_using_ctrl_c_v,
            copy_paste_using_shift_insert_ctrl_insert: settings
                .copy_paste_using_shift_insert_ctrl_insert,
            select_all_using_ctrl_a: settings.select_all_using_ctrl_a,
            select_using_shift_arrow: settings.select_using_shift_arrow,
            quote_conversion_on_paste: settings.quote_conversion_on_paste,
            navigation_using_ctrl_arrow: settings.navigation_using_ctrl_arrow,
        }
    }

    /// Overwrite the toggles of a repository snapshot; other fields are untouched
    pub fn write_to(&self, settings: &mut TerminalSettings) {
        for option in TerminalOption::all() {
            settings.set(*option, self.get(*option));
        }
    }

    pub fn get(&self, option: TerminalOption) -> bool {
        match option {
            TerminalOption::CopyPasteUsingCtrlCV => self.copy_paste_using_ctrl_c_v,
            TerminalOption::CopyPasteUsingShiftInsertCtrlInsert => {
                self.copy_paste_using_shift_insert_ctrl_insert
            }
            TerminalOption::SelectAllUsingCtrlA => self.select_all_using_ctrl_a,
            TerminalOption::SelectUsingShiftArrow => self.select_using_shift_arrow,
            TerminalOption::QuoteConversionOnPaste => self.quote_conversion_on_paste,
            TerminalOption::NavigationUsingCtrlArrow => self.navigation_using_ctrl_arrow,
        }
    }

    pub fn set(&mut self, option: TerminalOption, value: bool) {
        match option {
            TerminalOption::CopyPasteUsingCtrlCV => self.copy_paste_using_ctrl_c_v = value,
            TerminalOption::CopyPasteUsingShiftInsertCtrlInsert => {
                self.copy_paste_using_shift_insert_ctrl_insert = value
            }
            TerminalOption::SelectAllUsingCtrlA => self.select_all_using_ctrl_a = value,
            TerminalOption::SelectUsingShiftArrow => self.select_using_shift_arrow = value,
            TerminalOption::QuoteConversionOnPaste => self.quote_conversion_on_paste = value,
            TerminalOption::NavigationUsingCtrlArrow => self.navigation_using_ctrl_arrow = value,
        }
    }
}

/// A property of the terminal options pane that can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalProperty {
    /// One of the six interaction toggles
    Option(TerminalOption),
    /// The aggregate dirty flag
    IsDirty,
}

/// Notification delivered to pane observers after a mutation.
///
/// Carries the state as it is once the mutation has fully completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyChanged {
    pub property: TerminalProperty,
    pub preferences: TerminalPreferences,
    pub is_dirty: bool,
}
