//! Command-line interface for termprefs.
//!
//! Every command goes through the same options panes a dialog would use,
//! so edits are committed with the panes' dirty-tracking rules.

use crate::app::App;
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;
use termprefs_config::{TerminalOption, TerminalSettings};
use termprefs_settings_ui::{OptionsDialog, OptionsDialogAction, OptionsPane};

/// termprefs - edit terminal interaction preferences
#[derive(Parser, Debug)]
#[command(name = "termprefs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file to edit (default: ~/.config/termprefs/terminal.yaml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log level for the debug log (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<LevelFilter>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Show every option and its current value
    List,
    /// Change one option and save it
    Set {
        /// Option key, e.g. copy-paste-ctrl-c-v
        option: TerminalOption,
        /// New value: on/off, true/false, yes/no or 1/0
        #[arg(value_parser = parse_toggle, action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Restore every option to its default and save
    Reset,
    /// Print the settings file path
    Path,
}

/// Returned when a toggle value is not a recognised boolean spelling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value '{0}', expected on/off, true/false, yes/no or 1/0")]
pub struct ParseToggleError(pub String);

/// Parse a user-supplied on/off value
pub fn parse_toggle(s: &str) -> Result<bool, ParseToggleError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(ParseToggleError(s.to_string())),
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

/// Run one command, writing user-facing output to `out`
pub fn run(app: &App, command: &Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::List => {
            let pane = app.terminal_pane()?;
            writeln!(out, "{}", pane.title())?;
            for option in TerminalOption::all() {
                writeln!(
                    out,
                    "  {:<38} {:<3}  {}",
                    option.key(),
                    on_off(pane.option(*option)),
                    option.display_name()
                )?;
            }
        }
        Commands::Set { option, value } => {
            let mut pane = app.terminal_pane()?;
            pane.set_option(*option, *value);
            commit(pane)?;
            writeln!(out, "{} = {}", option.key(), on_off(*value))?;
        }
        Commands::Reset => {
            let defaults = TerminalSettings::default();
            let mut pane = app.terminal_pane()?;
            for option in TerminalOption::all() {
                pane.set_option(*option, defaults.get(*option));
            }
            commit(pane)?;
            writeln!(out, "Terminal options reset to defaults")?;
        }
        Commands::Path => {
            writeln!(out, "{}", app.settings_path().display())?;
        }
    }
    Ok(())
}

/// Commit an edited pane the way the dialog's OK button does
fn commit(pane: impl OptionsPane + 'static) -> Result<()> {
    let mut dialog = OptionsDialog::new();
    dialog.add_pane(Box::new(pane));
    dialog.visible = true;
    dialog.handle_action(OptionsDialogAction::Ok)
}
