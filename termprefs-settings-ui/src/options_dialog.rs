//! Generic options dialog hosting any number of panes.
//!
//! The dialog only knows panes through [`OptionsPane`]: it renders the
//! selected pane's control, reports whether anything is pending, and
//! commits or discards on the user's behalf.
//!
//! Panes live for one opening of the dialog. Closing it, through OK or
//! Cancel, drops every pane; the composition root builds fresh panes from
//! the repository before the dialog is shown again.

use egui::{Context, Window};

use crate::section::PANE_MIN_WIDTH;
use crate::traits::OptionsPane;

/// Result of showing the options dialog for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsDialogAction {
    /// No button pressed
    None,
    /// Apply pending changes and close
    Ok,
    /// Apply pending changes and keep the dialog open
    Apply,
    /// Discard pending changes and close
    Cancel,
}

/// Options dialog host.
#[derive(Default)]
pub struct OptionsDialog {
    panes: Vec<Box<dyn OptionsPane>>,
    selected: usize,
    /// Whether the dialog window is currently visible
    pub visible: bool,
}

impl std::fmt::Debug for OptionsDialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionsDialog")
            .field("panes", &self.titles())
            .field("selected", &self.selected)
            .field("visible", &self.visible)
            .finish()
    }
}

impl OptionsDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pane; panes are shown in insertion order
    pub fn add_pane(&mut self, pane: Box<dyn OptionsPane>) {
        log::debug!("Options dialog: adding pane '{}'", pane.title());
        self.panes.push(pane);
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    /// Titles of all panes in display order
    pub fn titles(&self) -> Vec<&str> {
        self.panes.iter().map(|p| p.title()).collect()
    }

    pub fn pane(&self, index: usize) -> Option<&dyn OptionsPane> {
        self.panes.get(index).map(|p| p.as_ref())
    }

    pub fn pane_mut(&mut self, index: usize) -> Option<&mut (dyn OptionsPane + 'static)> {
        self.panes.get_mut(index).map(|p| p.as_mut())
    }

    /// Index of the pane currently shown
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select the pane shown by [`Self::show`]. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.panes.len() {
            self.selected = index;
        }
    }

    /// True if any pane has pending changes
    pub fn is_dirty(&self) -> bool {
        self.panes.iter().any(|p| p.is_dirty())
    }

    /// Apply every dirty pane, in order.
    ///
    /// Clean panes are skipped. Stops at the first failure and returns it;
    /// the failing pane and the panes after it keep their pending changes.
    pub fn apply_changes(&mut self) -> anyhow::Result<()> {
        for pane in self.panes.iter_mut().filter(|p| p.is_dirty()) {
            log::info!("Applying changes of options pane '{}'", pane.title());
            if let Err(e) = pane.apply_changes() {
                log::error!("Failed to apply options pane '{}': {e:#}", pane.title());
                return Err(e);
            }
        }
        Ok(())
    }

    /// Forget pending changes by marking every pane clean
    pub fn discard_changes(&mut self) {
        for pane in &mut self.panes {
            if pane.is_dirty() {
                log::debug!("Discarding changes of options pane '{}'", pane.title());
            }
            pane.set_dirty(false);
        }
    }

    /// Hide the dialog and drop its panes along with any edited values
    pub fn close(&mut self) {
        log::debug!("Closing options dialog with {} pane(s)", self.panes.len());
        self.panes.clear();
        self.selected = 0;
        self.visible = false;
    }

    /// Act on a button press from [`Self::show`].
    ///
    /// OK and Cancel close the dialog, dropping its panes. Returns an error
    /// if applying failed; the dialog then stays open with its panes so the
    /// user can retry or cancel.
    pub fn handle_action(&mut self, action: OptionsDialogAction) -> anyhow::Result<()> {
        match action {
            OptionsDialogAction::None => {}
            OptionsDialogAction::Apply => self.apply_changes()?,
            OptionsDialogAction::Ok => {
                self.apply_changes()?;
                self.close();
            }
            OptionsDialogAction::Cancel => {
                self.discard_changes();
                self.close();
            }
        }
        Ok(())
    }

    /// Render the dialog window and report which button, if any, was pressed.
    pub fn show(&mut self, ctx: &Context) -> OptionsDialogAction {
        if !self.visible {
            return OptionsDialogAction::None;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            return OptionsDialogAction::Cancel;
        }

        let mut action = OptionsDialogAction::None;
        let mut open = true;
        let dirty = self.is_dirty();

        Window::new("Options")
            .resizable(false)
            .collapsible(false)
            .min_width(PANE_MIN_WIDTH)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for (index, pane) in self.panes.iter().enumerate() {
                        if ui
                            .selectable_label(index == self.selected, pane.title())
                            .clicked()
                        {
                            self.selected = index;
                        }
                    }
                });
                ui.separator();

                if let Some(pane) = self.panes.get_mut(self.selected) {
                    pane.create_control().show(ui);
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        action = OptionsDialogAction::Ok;
                    }
                    if ui.add_enabled(dirty, egui::Button::new("Apply")).clicked() {
                        action = OptionsDialogAction::Apply;
                    }
                    if ui.button("Cancel").clicked() {
                        action = OptionsDialogAction::Cancel;
                    }
                    if dirty {
                        ui.colored_label(egui::Color32::YELLOW, "* Unsaved changes");
                    }
                });
            });

        if !open {
            action = OptionsDialogAction::Cancel;
        }
        action
    }
}
