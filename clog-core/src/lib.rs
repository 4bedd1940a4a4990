//! # clog-core
//! Core types for clog - levels, sinks and line formatting.

mod config;
mod error;
mod format;
mod level;
mod sink;

pub use config::{CLOG_CONFIG, ClogConfig, DEFAULT_TIME_FORMAT, is_valid_time_format};
pub use error::{LoggerError, report_not_initialized};
pub use format::{RESET, color_escape, format_log, format_message, timestamp};
pub use level::{Attributes, LevelSet, LogLevel};
pub use sink::{FileMode, LogFile, Sink, SinkKind, Stream};
