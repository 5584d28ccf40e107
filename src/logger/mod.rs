//! Logger module
//!
//! Process-wide logging sink for the server: access log entries in several
//! formats, plus error and warning lines. Targets stdout/stderr by default,
//! or files when configured.

mod format;

pub use format::AccessLogEntry;

use crate::config::LoggingConfig;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

static LOG_SINK: OnceLock<LogSink> = OnceLock::new();

/// Log output target
enum LogTarget {
    Stdout,
    Stderr,
    File(Mutex<File>),
}

/// Thread-safe sink holding the access and error targets
struct LogSink {
    access: LogTarget,
    error: LogTarget,
}

/// Initialize the global log sink from configuration.
///
/// Should be called once at application startup, before serving.
pub fn init(config: &LoggingConfig) -> io::Result<()> {
    let sink = LogSink {
        access: target_for(config.access_log_file.as_deref(), LogTarget::Stdout)?,
        error: target_for(config.error_log_file.as_deref(), LogTarget::Stderr)?,
    };
    LOG_SINK
        .set(sink)
        .map_err(|_| io::Error::new(io::ErrorKind::AlreadyExists, "Logger already initialized"))
}

fn target_for(path: Option<&str>, fallback: LogTarget) -> io::Result<LogTarget> {
    match path {
        Some(p) => Ok(LogTarget::File(Mutex::new(open_log_file(p)?))),
        None => Ok(fallback),
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn write_to_target(target: &LogTarget, message: &str) {
    match target {
        LogTarget::Stdout => println!("{message}"),
        LogTarget::Stderr => eprintln!("{message}"),
        LogTarget::File(file) => {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{message}");
            }
        }
    }
}

/// Write to the access/info log target
fn write_access(message: &str) {
    match LOG_SINK.get() {
        Some(sink) => write_to_target(&sink.access, message),
        None => println!("{message}"),
    }
}

/// Write to the error log target
fn write_error(message: &str) {
    match LOG_SINK.get() {
        Some(sink) => write_to_target(&sink.error, message),
        None => eprintln!("{message}"),
    }
}

/// Log a formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}

pub fn log_info(message: &str) {
    write_access(message);
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}
