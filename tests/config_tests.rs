//! Tests for the YAML-backed settings repository used through the panes

mod common;

use common::settings_file_in_tmp_dir;
use std::fs;
use std::sync::Arc;
use termprefs::config::{SettingsRepository, TerminalSettings, YamlSettingsRepository};
use termprefs::settings_ui::{OptionsPane, TerminalOptionsPane};

#[test]
fn test_settings_defaults() {
    let settings = TerminalSettings::default();
    assert!(settings.copy_paste_using_ctrl_c_v);
    assert!(settings.copy_paste_using_shift_insert_ctrl_insert);
    assert!(!settings.select_all_using_ctrl_a);
    assert!(settings.select_using_shift_arrow);
    assert!(settings.quote_conversion_on_paste);
    assert!(!settings.navigation_using_ctrl_arrow);
    assert_eq!(settings.font_family, "Monospace");
    assert_eq!(settings.font_size, 11.0);
    assert!(settings.other.is_empty());
}

#[test]
fn test_commit_preserves_keys_written_by_other_tools() {
    let (path, _temp_dir) = settings_file_in_tmp_dir();
    fs::write(
        &path,
        "font_family: Iosevka\nscrollback_lines: 5000\nselect_all_using_ctrl_a: false\n",
    )
    .unwrap();

    let repo = Arc::new(YamlSettingsRepository::new(&path));
    let mut pane = TerminalOptionsPane::new(repo.clone()).unwrap();
    pane.set_select_all_using_ctrl_a_enabled(true);
    pane.apply_changes().unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("scrollback_lines: 5000"));
    assert!(written.contains("font_family: Iosevka"));
    assert!(written.contains("select_all_using_ctrl_a: true"));

    let reloaded = repo.get_settings().unwrap();
    assert!(reloaded.select_all_using_ctrl_a);
    assert_eq!(reloaded.font_family, "Iosevka");
}

#[test]
fn test_two_panes_sharing_a_file_do_not_clobber_unrelated_fields() {
    let (path, _temp_dir) = settings_file_in_tmp_dir();
    let repo = Arc::new(YamlSettingsRepository::new(&path));

    let mut first = TerminalOptionsPane::new(repo.clone()).unwrap();
    let mut second = TerminalOptionsPane::new(repo.clone()).unwrap();

    // An unrelated field is committed between the two panes' loads and commits.
    let mut settings = repo.get_settings().unwrap();
    settings.font_size = 16.0;
    repo.set_settings(settings).unwrap();

    first.set_navigation_using_ctrl_arrow_enabled(true);
    first.apply_changes().unwrap();
    second.set_navigation_using_ctrl_arrow_enabled(true);
    second.apply_changes().unwrap();

    let stored = repo.get_settings().unwrap();
    assert_eq!(stored.font_size, 16.0);
    assert!(stored.navigation_using_ctrl_arrow);
}

#[test]
fn test_corrupt_file_fails_pane_construction() {
    let (path, _temp_dir) = settings_file_in_tmp_dir();
    fs::write(&path, "copy_paste_using_ctrl_c_v: {nested: map}\n").unwrap();

    let repo = Arc::new(YamlSettingsRepository::new(&path));
    assert!(TerminalOptionsPane::new(repo).is_err());
}
