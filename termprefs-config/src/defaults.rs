//! Default value functions for terminal settings.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `TerminalSettings` fields and by its `Default` impl, so a missing key and
//! a missing file resolve to the same value.

pub fn bool_false() -> bool {
    false
}

pub fn bool_true() -> bool {
    true
}

pub fn font_family() -> String {
    "Monospace".to_string()
}

pub fn font_size() -> f32 {
    11.0
}
