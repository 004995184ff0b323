// Library exports for testing and potential library use
//
// The binary is a thin shell over these modules:
//   - `app`: composition root wiring the settings repository into panes
//   - `cli`: clap command surface driving the panes
//   - `debug`: `log` bridge writing to the debug log file

pub mod app;
pub mod cli;
pub mod debug;

pub use termprefs_config as config;
pub use termprefs_settings_ui as settings_ui;
