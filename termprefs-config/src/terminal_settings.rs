//! Persisted terminal preference aggregate.

use crate::types::TerminalOption;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Terminal settings as stored by a [`crate::SettingsRepository`].
///
/// The six interaction toggles are edited by the terminal options pane.
/// The font fields and any keys this version does not know about are
/// carried through unchanged, so saving the toggles never drops data written
/// by another pane or another tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalSettings {
    /// Copy and paste with Ctrl+C / Ctrl+V
    #[serde(default = "crate::defaults::bool_true")]
    pub copy_paste_using_ctrl_c_v: bool,

    /// Copy and paste with Ctrl+Insert / Shift+Insert
    #[serde(default = "crate::defaults::bool_true")]
    pub copy_paste_using_shift_insert_ctrl_insert: bool,

    /// Select all with Ctrl+A
    #[serde(default = "crate::defaults::bool_false")]
    pub select_all_using_ctrl_a: bool,

    /// Select text with Shift+Arrow keys
    #[serde(default = "crate::defaults::bool_true")]
    pub select_using_shift_arrow: bool,

    /// Convert typographic quotes to ASCII when pasting
    #[serde(default = "crate::defaults::bool_true")]
    pub quote_conversion_on_paste: bool,

    /// Word navigation with Ctrl+Left / Ctrl+Right
    #[serde(default = "crate::defaults::bool_false")]
    pub navigation_using_ctrl_arrow: bool,

    /// Terminal font family
    #[serde(default = "crate::defaults::font_family")]
    pub font_family: String,

    /// Terminal font size in points
    #[serde(default = "crate::defaults::font_size")]
    pub font_size: f32,

    /// Keys not modelled above, preserved verbatim
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_yaml_ng::Value>,
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self {
            copy_paste_using_ctrl_c_v: crate::defaults::bool_true(),
            copy_paste_using_shift_insert_ctrl_insert: crate::defaults::bool_true(),
            select_all_using_ctrl_a: crate::defaults::bool_false(),
            select_using_shift_arrow: crate::defaults::bool_true(),
            quote_conversion_on_paste: crate::defaults::bool_true(),
            navigation_using_ctrl_arrow: crate::defaults::bool_false(),
            font_family: crate::defaults::font_family(),
            font_size: crate::defaults::font_size(),
            other: BTreeMap::new(),
        }
    }
}

impl TerminalSettings {
    /// Read one interaction toggle
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

    /// Write one interaction toggle
    pub fn set(&mut self, option: TerminalOption, value: bool) {
        let field = match option {
            TerminalOption::CopyPasteUsingCtrlCV => &mut self.copy_paste_using_ctrl_c_v,
            TerminalOption::CopyPasteUsingShiftInsertCtrlInsert => {
                &mut self.copy_paste_using_shift_insert_ctrl_insert
            }
            TerminalOption::SelectAllUsingCtrlA => &mut self.select_all_using_ctrl_a,
            TerminalOption::SelectUsingShiftArrow => &mut self.select_using_shift_arrow,
            TerminalOption::QuoteConversionOnPaste => &mut self.quote_conversion_on_paste,
            TerminalOption::NavigationUsingCtrlArrow => &mut self.navigation_using_ctrl_arrow,
        };
        *field = value;
    }
}
