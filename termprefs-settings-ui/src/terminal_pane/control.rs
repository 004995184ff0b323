//! egui surface for the terminal options pane.

use super::TerminalOptionsPane;
use crate::section::{section_heading, section_spacing};
use crate::traits::{OptionsPane, PaneControl};
use termprefs_config::TerminalOption;

/// Groups of toggles, in the order they are shown.
const SECTIONS: &[(&str, &[TerminalOption])] = &[
    (
        "Clipboard",
        &[
            TerminalOption::CopyPasteUsingCtrlCV,
            TerminalOption::CopyPasteUsingShiftInsertCtrlInsert,
        ],
    ),
    (
        "Selection",
        &[
            TerminalOption::SelectAllUsingCtrlA,
            TerminalOption::SelectUsingShiftArrow,
        ],
    ),
    ("Navigation", &[TerminalOption::NavigationUsingCtrlArrow]),
    ("Paste", &[TerminalOption::QuoteConversionOnPaste]),
];

fn hover_text(option: TerminalOption) -> &'static str {
    match option {
        TerminalOption::CopyPasteUsingCtrlCV => {
            "Ctrl+C copies the selection (or sends an interrupt when nothing is selected) \
             and Ctrl+V pastes"
        }
        TerminalOption::CopyPasteUsingShiftInsertCtrlInsert => {
            "Ctrl+Insert copies the selection and Shift+Insert pastes"
        }
        TerminalOption::SelectAllUsingCtrlA => {
            "Ctrl+A selects the whole buffer instead of moving to the start of the line"
        }
        TerminalOption::SelectUsingShiftArrow => "Shift+Arrow keys extend the selection",
        TerminalOption::QuoteConversionOnPaste => {
            "Curly quotes in pasted text are replaced by straight ASCII quotes"
        }
        TerminalOption::NavigationUsingCtrlArrow => {
            "Ctrl+Left and Ctrl+Right move the cursor by words"
        }
    }
}

/// Checkbox page bound to a [`TerminalOptionsPane`].
///
/// Every toggle goes through the pane's setter, so dirty tracking and
/// change notifications happen in one place.
pub struct TerminalOptionsControl<'a> {
    pane: &'a mut TerminalOptionsPane,
}

impl<'a> TerminalOptionsControl<'a> {
    pub fn new(pane: &'a mut TerminalOptionsPane) -> Self {
        Self { pane }
    }
}

impl PaneControl for TerminalOptionsControl<'_> {
    fn show(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        for (title, options) in SECTIONS {
            section_heading(ui, title);
            for option in *options {
                let mut value = self.pane.option(*option);
                if ui
                    .checkbox(&mut value, option.display_name())
                    .on_hover_text(hover_text(*option))
                    .changed()
                {
                    self.pane.set_option(*option, value);
                    changed = true;
                }
            }
            section_spacing(ui);
        }

        if self.pane.is_dirty() {
            ui.label(egui::RichText::new("Modified - apply to save").weak());
        }

        changed
    }
}
