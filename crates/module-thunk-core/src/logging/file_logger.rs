//! File-based debug logger for troubleshooting
//!
//! Provides a global logger that writes to a file. Useful when a host
//! embeds the resolver and its stdout/stderr are not visible.
//!
//! Environment:
//! - `MODULE_THUNK_DEBUG`: `1` or `true` enables logging (default off)
//! - `MODULE_THUNK_LOG_LEVEL`: `trace`, `debug`, `info`, `warn` or `error` (default `debug`)
//! - `MODULE_THUNK_LOG_FILE`: log path (default `<temp>/module-thunk-debug.log`)

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Parse a level name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO "),
            LogLevel::Warn => write!(f, "WARN "),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Logger settings read once from the environment
#[derive(Debug, Clone)]
struct LoggerConfig {
    enabled: bool,
    min_level: LogLevel,
    path: PathBuf,
}

impl LoggerConfig {
    fn from_env() -> Self {
        let enabled = std::env::var("MODULE_THUNK_DEBUG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);
        let min_level = std::env::var("MODULE_THUNK_LOG_LEVEL")
            .ok()
            .and_then(|v| LogLevel::from_name(&v))
            .unwrap_or(LogLevel::Debug);
        let path = std::env::var_os("MODULE_THUNK_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(default_log_path);

        Self { enabled, min_level, path }
    }
}

fn default_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("module-thunk-debug.log");
    path
}

fn open_log(path: &Path) -> Option<File> {
    OpenOptions::new().create(true).append(true).open(path).ok()
}

static CONFIG: Lazy<LoggerConfig> = Lazy::new(LoggerConfig::from_env);

/// Log file handle, opened on first write
static FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| {
    let file = if CONFIG.enabled { open_log(&CONFIG.path) } else { None };
    Mutex::new(file)
});

fn timestamp() -> String {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs();
            let millis = d.subsec_millis();
            let hours = (secs % 86400) / 3600;
            let mins = (secs % 3600) / 60;
            let secs = secs % 60;
            format!("{:02}:{:02}:{:02}.{:03}", hours, mins, secs, millis)
        })
        .unwrap_or_else(|_| "??:??:??.???".to_string())
}

/// Whether a message at `level` would be written
pub fn enabled(level: LogLevel) -> bool {
    CONFIG.enabled && level >= CONFIG.min_level
}

/// Log a message at the specified level
pub fn log(level: LogLevel, module: &str, message: &str) {
    if !enabled(level) {
        return;
    }
    let mut guard = FILE.lock();
    if let Some(file) = guard.as_mut() {
        let _ = writeln!(file, "[{}] [{}] [{}] {}", timestamp(), level, module, message);
        let _ = file.flush();
    }
}

/// Log a trace message
pub fn trace(module: &str, message: &str) {
    log(LogLevel::Trace, module, message);
}

/// Log a debug message
pub fn debug(module: &str, message: &str) {
    log(LogLevel::Debug, module, message);
}

/// Log an info message
pub fn info(module: &str, message: &str) {
    log(LogLevel::Info, module, message);
}

/// Log a warning message
pub fn warn(module: &str, message: &str) {
    log(LogLevel::Warn, module, message);
}

/// Log an error message
pub fn error(module: &str, message: &str) {
    log(LogLevel::Error, module, message);
}

/// Logging macros with automatic module name; arguments are only formatted
/// when the level is enabled
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        if $crate::logging::file_logger::enabled($crate::logging::LogLevel::Trace) {
            $crate::logging::file_logger::trace(module_path!(), &format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logging::file_logger::enabled($crate::logging::LogLevel::Debug) {
            $crate::logging::file_logger::debug(module_path!(), &format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if $crate::logging::file_logger::enabled($crate::logging::LogLevel::Info) {
            $crate::logging::file_logger::info(module_path!(), &format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        if $crate::logging::file_logger::enabled($crate::logging::LogLevel::Warn) {
            $crate::logging::file_logger::warn(module_path!(), &format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        if $crate::logging::file_logger::enabled($crate::logging::LogLevel::Error) {
            $crate::logging::file_logger::error(module_path!(), &format!($($arg)*))
        }
    };
}

/// Get the path to the log file
pub fn log_file_path() -> PathBuf {
    CONFIG.path.clone()
}

/// Truncate the log file and reopen it for appending
pub fn clear_log() {
    if !CONFIG.enabled {
        return;
    }
    let mut guard = FILE.lock();
    if let Ok(file) = File::create(&CONFIG.path) {
        drop(file);
    }
    *guard = open_log(&CONFIG.path);
}
