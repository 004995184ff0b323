//! Trait definitions shared by options panes and their host.
//!
//! An options dialog treats every pane uniformly through [`OptionsPane`];
//! each pane variant decides what it edits and where it stores it.

/// A page of an options dialog.
///
/// Implemented by every settings pane so that a host can render, query and
/// commit them without knowing what they edit.
pub trait OptionsPane {
    /// Label shown in the dialog's tab strip
    fn title(&self) -> &str;

    /// Create the visual surface bound to this pane.
    ///
    /// The control borrows the pane and reads/writes its properties while it
    /// is shown. Hosts using immediate-mode rendering call this every frame.
    fn create_control(&mut self) -> Box<dyn PaneControl + '_>;

    /// Whether the pane holds edits that have not been applied
    fn is_dirty(&self) -> bool;

    /// Force the dirty state, e.g. after the host discarded the edits
    fn set_dirty(&mut self, dirty: bool);

    /// Commit the pane's edits to its backing store.
    ///
    /// Must only be called while [`Self::is_dirty`] is true; calling it on a
    /// clean pane is a programming error and panics.
    fn apply_changes(&mut self) -> anyhow::Result<()>;
}

/// Visual surface produced by [`OptionsPane::create_control`].
pub trait PaneControl {
    /// Render the control. Returns true if a value changed this frame.
    fn show(&mut self, ui: &mut egui::Ui) -> bool;
}
