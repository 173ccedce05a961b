//! Debug logging for resolution decisions
//!
//! The resolvers trace each decision through the global file logger. It is
//! off unless `MODULE_THUNK_DEBUG` is set.

pub mod file_logger;

pub use file_logger::{
    log, trace, debug, info, warn, error,
    enabled, log_file_path, clear_log, LogLevel,
};
