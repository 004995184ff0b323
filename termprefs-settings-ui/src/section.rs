//! Layout helpers shared by options panes.
//!
//! Keeps section spacing and headings consistent between pages.

/// Minimum width of the area a pane is rendered into
pub const PANE_MIN_WIDTH: f32 = 420.0;

/// Helper to show a section heading with consistent styling.
pub fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.add_space(8.0);
    ui.label(egui::RichText::new(title).strong());
    ui.add_space(4.0);
}

/// Helper to add spacing after a section.
pub fn section_spacing(ui: &mut egui::Ui) {
    ui.add_space(12.0);
}
