//! Terminal interaction options.

use std::fmt;
use std::str::FromStr;

/// One of the boolean terminal interaction preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalOption {
    /// Copy and paste with Ctrl+C / Ctrl+V
    CopyPasteUsingCtrlCV,
    /// Copy and paste with Ctrl+Insert / Shift+Insert
    CopyPasteUsingShiftInsertCtrlInsert,
    /// Select the whole buffer with Ctrl+A
    SelectAllUsingCtrlA,
    /// Extend the selection with Shift+Arrow keys
    SelectUsingShiftArrow,
    /// Replace typographic quotes with plain ASCII quotes when pasting
    QuoteConversionOnPaste,
    /// Jump between words with Ctrl+Left / Ctrl+Right
    NavigationUsingCtrlArrow,
}

impl TerminalOption {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            TerminalOption::CopyPasteUsingCtrlCV => "Use Ctrl+C/Ctrl+V to copy/paste",
            TerminalOption::CopyPasteUsingShiftInsertCtrlInsert => {
                "Use Shift+Insert/Ctrl+Insert to copy/paste"
            }
            TerminalOption::SelectAllUsingCtrlA => "Use Ctrl+A to select all",
            TerminalOption::SelectUsingShiftArrow => "Use Shift+Arrow keys to select text",
            TerminalOption::QuoteConversionOnPaste => "Convert typographic quotes when pasting",
            TerminalOption::NavigationUsingCtrlArrow => "Use Ctrl+Left/Right to jump between words",
        }
    }

    /// Stable identifier used on the command line
    pub fn key(&self) -> &'static str {
        match self {
            TerminalOption::CopyPasteUsingCtrlCV => "copy-paste-ctrl-c-v",
            TerminalOption::CopyPasteUsingShiftInsertCtrlInsert => {
                "copy-paste-shift-insert-ctrl-insert"
            }
            TerminalOption::SelectAllUsingCtrlA => "select-all-ctrl-a",
            TerminalOption::SelectUsingShiftArrow => "select-shift-arrow",
            TerminalOption::QuoteConversionOnPaste => "quote-conversion-on-paste",
            TerminalOption::NavigationUsingCtrlArrow => "navigation-ctrl-arrow",
        }
    }

    /// All options in display order
    pub fn all() -> &'static [TerminalOption] {
        &[
            TerminalOption::CopyPasteUsingCtrlCV,
            TerminalOption::CopyPasteUsingShiftInsertCtrlInsert,
            TerminalOption::SelectAllUsingCtrlA,
            TerminalOption::SelectUsingShiftArrow,
            TerminalOption::QuoteConversionOnPaste,
            TerminalOption::NavigationUsingCtrlArrow,
        ]
    }
}

impl fmt::Display for TerminalOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string does not name a terminal option.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown terminal option '{0}'")]
pub struct ParseOptionError(pub String);

impl FromStr for TerminalOption {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TerminalOption::all()
            .iter()
            .copied()
            .find(|option| option.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseOptionError(s.to_string()))
    }
}
