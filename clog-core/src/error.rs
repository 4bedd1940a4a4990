use std::{io, path::PathBuf};

use colored::Colorize;
use thiserror::Error;

/// Errors returned by the logger.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The global logger was used before `init` or after `terminate`.
    #[error("clog has not been initialized")]
    NotInitialized,

    /// `init` was called on an already initialized global logger.
    #[error("clog is already initialized")]
    AlreadyInitialized,

    /// A log file could not be opened or created.
    #[error("failed to open log file {}: {source}", .path.display())]
    FailedToOpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The sink rejected the write.
    #[error("failed to write log line: {0}")]
    Write(#[from] io::Error),

    /// A formatting trait implementation returned an error.
    #[error("failed to format log message")]
    Format(#[from] std::fmt::Error),

    /// Another `log` crate logger is already installed.
    #[error("a logger is already registered with the log crate")]
    LoggerAlreadySet(#[from] log::SetLoggerError),
}

impl LoggerError {
    pub fn failed_to_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FailedToOpenFile {
            path: path.into(),
            source,
        }
    }
}

/// Prints the diagnostic emitted when the global logger is used while uninitialized.
pub fn report_not_initialized() {
    eprintln!(
        "{} clog has not been initialized",
        "CLOG FATAL ERROR:".red().bold()
    );
}
