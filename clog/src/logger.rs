use std::{
    fmt,
    path::Path,
    sync::{Mutex, MutexGuard, PoisonError},
};

use clog_core::{
    Attributes, FileMode, LevelSet, LogLevel, LoggerError, Sink, SinkKind, Stream,
    format_log, format_message, timestamp,
};

/// Mutable state of a logger, only accessed under its lock.
struct LoggerState {
    sink: Sink,
    attributes: Attributes,
    ignored_types: LevelSet,
}

/// A thread-safe logger writing one composed line per call to a single sink.
///
/// The sink is released when the logger is dropped; file sinks are flushed and closed.
pub struct Logger {
    state: Mutex<LoggerState>,
    time_format: String,
}

impl Logger {
    /// Logger writing to `stream`, or stdout if `None`.
    pub fn new(stream: Option<Stream>, attributes: Attributes) -> Self {
        Self::from_parts(
            Sink::console(stream.unwrap_or_default()),
            crate::resolve_attributes(attributes),
            LevelSet::EMPTY,
            crate::resolve_time_format(None),
        )
    }

    /// Logger writing to the file at `path`, truncated if `OVERWRITE_FILE_ON_OPEN` is set.
    pub fn with_file<P: AsRef<Path>>(path: P, attributes: Attributes) -> Result<Self, LoggerError> {
        crate::logger_config()
            .with_log_file(path)
            .with_attributes(attributes)
            .build()
    }

    pub(crate) fn from_parts(
        sink: Sink,
        attributes: Attributes,
        ignored_types: LevelSet,
        time_format: String,
    ) -> Self {
        Self {
            state: Mutex::new(LoggerState {
                sink,
                attributes,
                ignored_types,
            }),
            time_format,
        }
    }

    fn state(&self) -> MutexGuard<'_, LoggerState> {
        // A sink panicking mid-write leaves the state itself consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Writes `[<time>] <header><message>` to the sink.
    ///
    /// Ignored levels return `Ok(())` without writing anything. `Debug` messages are
    /// dropped in builds without `debug_assertions`. No line terminator is added.
    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) -> Result<(), LoggerError> {
        if !level.is_compiled_in() {
            return Ok(());
        }
        let ignored = self.state().ignored_types.contains(level);
        if ignored {
            return Ok(());
        }

        let message = format_message(args)?;
        let time = timestamp(&self.time_format);

        let mut state = self.state();
        let color = state.sink.kind() == SinkKind::Console
            && !state.attributes.contains(Attributes::NO_COLOR);
        let line = format_log(&time, level, &message, color);
        state.sink.write_line(&line)?;
        Ok(())
    }

    /// Switches to a console stream, stdout if `None`. The previous sink is closed.
    pub fn set_output_stream(&self, stream: Option<Stream>) {
        self.set_output_sink(Sink::console(stream.unwrap_or_default()));
    }

    /// Switches to the file at `path`. On failure the current sink is kept.
    pub fn set_output_file<P: AsRef<Path>>(&self, path: P) -> Result<(), LoggerError> {
        let mode = FileMode::from_attributes(self.attributes());
        let sink = Sink::open_file(path, mode)?;
        self.set_output_sink(sink);
        Ok(())
    }

    /// Installs `sink`, closing the previous one.
    pub fn set_output_sink(&self, sink: Sink) {
        let previous = std::mem::replace(&mut self.state().sink, sink);
        drop(previous);
    }

    /// Replaces the set of ignored levels.
    pub fn set_ignored_types(&self, types: impl Into<LevelSet>) {
        self.state().ignored_types = types.into();
    }

    pub fn ignored_types(&self) -> LevelSet {
        self.state().ignored_types
    }

    pub fn set_attributes(&self, attributes: Attributes) {
        self.state().attributes = attributes;
    }

    pub fn attributes(&self) -> Attributes {
        self.state().attributes
    }

    pub fn sink_kind(&self) -> SinkKind {
        self.state().sink.kind()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        f.debug_struct("Logger")
            .field("sink", &state.sink)
            .field("attributes", &state.attributes)
            .field("ignored_types", &state.ignored_types)
            .field("time_format", &self.time_format)
            .finish()
    }
}
