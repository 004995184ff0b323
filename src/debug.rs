//! Debug logging bridge for termprefs.
//!
//! Routes every `log::*!` call to a log file so diagnostic output never
//! mixes with the command's normal stdout. Level is picked from, in order:
//!
//! 1. the `--log-level` CLI flag
//! 2. `RUST_LOG` (a bare level name such as `debug`)
//! 3. `DEBUG_LEVEL` (0 = off, 1 = error, 2 = info, 3 = debug, 4 = trace)
//!
//! Output goes to `/tmp/termprefs_debug.log` on Unix/macOS, or
//! `%TEMP%\termprefs_debug.log` on Windows. When `RUST_LOG` is set, every
//! line is mirrored to stderr as well.

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// File name of the debug log inside the temp directory.
const LOG_FILE_NAME: &str = "termprefs_debug.log";

/// Map the numeric `DEBUG_LEVEL` convention onto a log level filter
pub fn level_from_debug_level(value: &str) -> LevelFilter {
    match value.trim().parse::<u8>() {
        Ok(1) => LevelFilter::Error,
        Ok(2) => LevelFilter::Info,
        Ok(3) => LevelFilter::Debug,
        Ok(4) => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

/// Resolve the effective level from the CLI flag and the environment
pub fn resolve_level(
    cli_level: Option<LevelFilter>,
    rust_log: Option<&str>,
    debug_level: Option<&str>,
) -> LevelFilter {
    if let Some(level) = cli_level {
        return level;
    }
    if let Some(level) = rust_log.and_then(|v| v.trim().parse::<LevelFilter>().ok()) {
        return level;
    }
    debug_level
        .map(level_from_debug_level)
        .unwrap_or(LevelFilter::Off)
}

/// Path of the debug log file
pub fn log_file_path() -> PathBuf {
    #[cfg(unix)]
    {
        PathBuf::from("/tmp").join(LOG_FILE_NAME)
    }
    #[cfg(not(unix))]
    {
        std::env::temp_dir().join(LOG_FILE_NAME)
    }
}

struct FileLogger {
    level: LevelFilter,
    file: Mutex<Option<File>>,
    mirror_to_stderr: bool,
}

impl FileLogger {
    fn format_line(record: &Record) -> String {
        format!(
            "[{}] [{:<5}] [{}] {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = Self::format_line(record);
        if let Some(file) = self.file.lock().as_mut() {
            // A failing log write must never take the command down with it.
            let _ = file.write_all(line.as_bytes());
        }
        if self.mirror_to_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

/// Install the logging bridge.
///
/// Safe to call once per process; later calls are ignored.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let debug_level = std::env::var("DEBUG_LEVEL").ok();
    let level = resolve_level(cli_level, rust_log.as_deref(), debug_level.as_deref());

    let file = if level == LevelFilter::Off {
        None
    } else {
        // Silently run without a file if it can't be opened.
        OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_file_path())
            .ok()
    };

    let logger = FileLogger {
        level,
        file: Mutex::new(file),
        mirror_to_stderr: rust_log.is_some() && level != LevelFilter::Off,
    };

    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
        log::info!(
            "termprefs {} debug session started (level={})",
            env!("CARGO_PKG_VERSION"),
            level
        );
    }
}
