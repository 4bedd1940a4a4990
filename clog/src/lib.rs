//! # clog
//! Thread-safe leveled logger writing colored lines to the console or to a file.
//!
//! Every call writes one line `[<local time>] <header><message>` under a lock, so
//! lines from different threads never interleave. On a console the header and message
//! are colored by level; files never receive color escapes.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! clog = "0.3.0"
//! ```
//!
//! ```rust
//! use clog::{Attributes, LogLevel};
//!
//! clog::init(None, Attributes::NONE).unwrap();
//! clog::info!("Hello, {}!\n", "world").unwrap();
//! clog::set_ignored_types(LogLevel::Debug | LogLevel::Trace).unwrap();
//! clog::trace!("not written\n").unwrap();
//! clog::terminate().unwrap();
//! ```
//!
//! ## Logging to files
//! The log file is created if it does not exist. It is appended to, unless the
//! `OVERWRITE_FILE_ON_OPEN` attribute is set.
//!
//! ```rust
//! use clog::Attributes;
//!
//! let path = std::env::temp_dir().join("clog_doc_app.log");
//! clog::init_with_file(&path, Attributes::OVERWRITE_FILE_ON_OPEN).unwrap();
//! clog::warning!("Hello, world!\n").unwrap();
//! clog::terminate().unwrap(); // closes the file
//! assert!(std::fs::read_to_string(&path).unwrap().ends_with("] WARNING: Hello, world!\n"));
//! ```
//!
//! ## Scoped loggers
//! A [`Logger`] can also be owned directly and shared between threads. Its sink is
//! closed when it is dropped.
//!
//! ```rust
//! use std::sync::Arc;
//! use clog::{LogLevel, Stream, logger_config};
//!
//! let logger = Arc::new(logger_config().with_stream(Stream::Stderr).no_color().build().unwrap());
//! let handles: Vec<_> = (0..4).map(|i| {
//!     let logger = Arc::clone(&logger);
//!     std::thread::spawn(move || {
//!         logger.log(LogLevel::Info, format_args!("Hello from thread {i}\n")).unwrap();
//!     })
//! }).collect();
//! for h in handles { h.join().unwrap(); }
//! ```
//!
//! ## Environment
//! - `CLOG_NO_COLOR=true` adds the `NO_COLOR` attribute to every logger.
//! - `CLOG_TIME_FORMAT` sets the chrono strftime format of timestamps
//!   (default `%a %b %e %H:%M:%S %Y`).

mod bridge;
mod global;
mod logger;
mod macros;
#[cfg(test)]
mod test_utils;

use std::path::{Path, PathBuf};

pub use bridge::init_log_bridge;
pub use clog_core::{
    Attributes, FileMode, LevelSet, LogFile, LogLevel, LoggerError, Sink, SinkKind, Stream,
};
pub use global::{
    attributes, ignored_types, init, init_with_file, is_initialized, log, log_with_args,
    set_attributes, set_ignored_types, set_output_file, set_output_sink, set_output_stream,
    sink_kind, terminate,
};
pub use logger::Logger;

use clog_core::{CLOG_CONFIG, is_valid_time_format};

/// Applies the environment configuration to user supplied attributes.
pub(crate) fn resolve_attributes(attributes: Attributes) -> Attributes {
    if CLOG_CONFIG.NO_COLOR {
        attributes | Attributes::NO_COLOR
    } else {
        attributes
    }
}

/// Picks the time format: the requested one if valid, else the environment's.
pub(crate) fn resolve_time_format(requested: Option<&str>) -> String {
    match requested {
        Some(format) if is_valid_time_format(format) => format.into(),
        _ => CLOG_CONFIG.time_format().into(),
    }
}

/// Where a built logger writes.
enum Output {
    Stream(Stream),
    File(PathBuf),
    Sink(Sink),
}

/// Builder for configuring and initializing the logger.
pub struct ConfigBuilder {
    output: Output,
    attributes: Attributes,
    ignored_types: LevelSet,
    time_format: Option<String>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            output: Output::Stream(Stream::Stdout),
            attributes: Attributes::NONE,
            ignored_types: LevelSet::EMPTY,
            time_format: None,
        }
    }
}

impl ConfigBuilder {
    /// Sets a console stream.
    pub fn with_stream(self, stream: Stream) -> Self {
        Self {
            output: Output::Stream(stream),
            ..self
        }
    }
    /// Maybe sets a console stream, stdout otherwise.
    pub fn maybe_with_stream(self, stream: Option<Stream>) -> Self {
        self.with_stream(stream.unwrap_or_default())
    }
    /// Sets a log file. The file is opened when the logger is built.
    pub fn with_log_file<P: AsRef<Path>>(self, path: P) -> Self {
        Self {
            output: Output::File(path.as_ref().to_path_buf()),
            ..self
        }
    }
    /// Maybe sets a log file, stdout otherwise.
    pub fn maybe_with_log_file<P: AsRef<Path>>(self, path: Option<P>) -> Self {
        match path {
            Some(path) => self.with_log_file(path),
            None => self.with_stream(Stream::Stdout),
        }
    }
    /// Sets an already built sink.
    pub fn with_sink(self, sink: Sink) -> Self {
        Self {
            output: Output::Sink(sink),
            ..self
        }
    }
    pub fn with_attributes(self, attributes: Attributes) -> Self {
        Self { attributes, ..self }
    }
    /// Never write color escapes
    pub fn no_color(self) -> Self {
        Self {
            attributes: self.attributes | Attributes::NO_COLOR,
            ..self
        }
    }
    /// Truncate log files when opening them
    pub fn overwrite_files(self) -> Self {
        Self {
            attributes: self.attributes | Attributes::OVERWRITE_FILE_ON_OPEN,
            ..self
        }
    }
    pub fn with_ignored_types(self, types: impl Into<LevelSet>) -> Self {
        Self {
            ignored_types: types.into(),
            ..self
        }
    }
    /// Sets a chrono strftime format for timestamps. Invalid formats are ignored.
    pub fn with_time_format(self, format: &str) -> Self {
        Self {
            time_format: Some(format.into()),
            ..self
        }
    }
    /// Builds a logger owned by the caller.
    pub fn build(self) -> Result<Logger, LoggerError> {
        let Self {
            output,
            attributes,
            ignored_types,
            time_format,
        } = self;
        let attributes = resolve_attributes(attributes);
        let sink = match output {
            Output::Stream(stream) => Sink::console(stream),
            Output::File(path) => Sink::open_file(path, FileMode::from_attributes(attributes))?,
            Output::Sink(sink) => sink,
        };
        Ok(Logger::from_parts(
            sink,
            attributes,
            ignored_types,
            resolve_time_format(time_format.as_deref()),
        ))
    }
    /// Initialize the logger globally.
    /// Fails with [`LoggerError::AlreadyInitialized`] without opening any file if the
    /// global logger is already initialized.
    pub fn init_global(self) -> Result<(), LoggerError> {
        global::install(|| self.build())
    }
}

/// Returns a default ConfigBuilder for configuring the logger.
pub fn logger_config() -> ConfigBuilder {
    ConfigBuilder::default()
}
