//! Process-wide logger.
//!
//! `init` / `init_with_file` move the global logger from the uninitialized to the
//! initialized state, `terminate` moves it back. Every other function fails with
//! [`LoggerError::NotInitialized`] and prints a diagnostic on stderr while the logger is
//! uninitialized.

use std::{
    fmt,
    path::Path,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use clog_core::{
    Attributes, LevelSet, LogLevel, LoggerError, Sink, SinkKind, Stream, report_not_initialized,
};

use crate::{Logger, logger_config};

/// `None` while uninitialized.
static GLOBAL_LOGGER: RwLock<Option<Logger>> = RwLock::new(None);

fn read_global() -> RwLockReadGuard<'static, Option<Logger>> {
    GLOBAL_LOGGER.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_global() -> RwLockWriteGuard<'static, Option<Logger>> {
    GLOBAL_LOGGER.write().unwrap_or_else(PoisonError::into_inner)
}

fn with_logger<T>(f: impl FnOnce(&Logger) -> T) -> Result<T, LoggerError> {
    match read_global().as_ref() {
        Some(logger) => Ok(f(logger)),
        None => {
            report_not_initialized();
            Err(LoggerError::NotInitialized)
        }
    }
}

/// Installs the logger built by `build`, unless one is already installed.
/// `build` only runs once the global logger is known to be uninitialized.
pub(crate) fn install(
    build: impl FnOnce() -> Result<Logger, LoggerError>,
) -> Result<(), LoggerError> {
    let mut global = write_global();
    if global.is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    *global = Some(build()?);
    Ok(())
}

/// Global logger of the `log` crate bridge: no diagnostic when uninitialized.
pub(crate) fn try_with_logger<T>(f: impl FnOnce(&Logger) -> T) -> Option<T> {
    read_global().as_ref().map(f)
}

/// Initializes the global logger on a console stream (stdout if `None`).
///
/// Call it before spawning threads that log.
pub fn init(stream: Option<Stream>, attributes: Attributes) -> Result<(), LoggerError> {
    logger_config()
        .maybe_with_stream(stream)
        .with_attributes(attributes)
        .init_global()
}

/// Initializes the global logger on the file at `path`.
///
/// The file is truncated if `attributes` contains `OVERWRITE_FILE_ON_OPEN` and appended
/// to otherwise. It is not touched if the logger is already initialized.
pub fn init_with_file<P: AsRef<Path>>(path: P, attributes: Attributes) -> Result<(), LoggerError> {
    logger_config()
        .with_log_file(path)
        .with_attributes(attributes)
        .init_global()
}

pub fn is_initialized() -> bool {
    read_global().is_some()
}

/// Logs an already formatted message. See [`Logger::log`].
pub fn log_with_args(level: LogLevel, args: fmt::Arguments<'_>) -> Result<(), LoggerError> {
    with_logger(|logger| logger.log(level, args))?
}

/// Logs `message` at `level`.
pub fn log(level: LogLevel, message: impl fmt::Display) -> Result<(), LoggerError> {
    log_with_args(level, format_args!("{message}"))
}

/// Switches the global logger to a console stream (stdout if `None`).
pub fn set_output_stream(stream: Option<Stream>) -> Result<(), LoggerError> {
    with_logger(|logger| logger.set_output_stream(stream))
}

/// Switches the global logger to the file at `path`.
pub fn set_output_file<P: AsRef<Path>>(path: P) -> Result<(), LoggerError> {
    with_logger(|logger| logger.set_output_file(path))?
}

pub fn set_output_sink(sink: Sink) -> Result<(), LoggerError> {
    with_logger(|logger| logger.set_output_sink(sink))
}

/// Replaces the set of ignored levels.
pub fn set_ignored_types(types: impl Into<LevelSet>) -> Result<(), LoggerError> {
    with_logger(|logger| logger.set_ignored_types(types))
}

pub fn ignored_types() -> Result<LevelSet, LoggerError> {
    with_logger(Logger::ignored_types)
}

pub fn set_attributes(attributes: Attributes) -> Result<(), LoggerError> {
    with_logger(|logger| logger.set_attributes(attributes))
}

pub fn attributes() -> Result<Attributes, LoggerError> {
    with_logger(Logger::attributes)
}

pub fn sink_kind() -> Result<SinkKind, LoggerError> {
    with_logger(Logger::sink_kind)
}

/// Closes the sink and returns the global logger to the uninitialized state.
///
/// Join every thread that logs before calling it: their later calls fail with
/// [`LoggerError::NotInitialized`].
pub fn terminate() -> Result<(), LoggerError> {
    let logger = write_global().take();
    match logger {
        Some(logger) => {
            drop(logger);
            Ok(())
        }
        None => {
            report_not_initialized();
            Err(LoggerError::NotInitialized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{SharedBuffer, serial, temp_log_file};

    fn reset() {
        if is_initialized() {
            terminate().unwrap();
        }
    }

    fn split_line(line: &str) -> (&str, &str) {
        line.strip_prefix('[').unwrap().split_once("] ").unwrap()
    }

    #[test]
    fn test_in_memory_no_color() {
        let _serial = serial();
        reset();
        let buffer = SharedBuffer::default();
        init(Some(Stream::writer(buffer.clone())), Attributes::NO_COLOR).unwrap();
        crate::log!(LogLevel::Info, "x={}", 5).unwrap();
        let contents = buffer.contents();
        let (time, message) = split_line(&contents);
        assert!(!time.is_empty());
        assert!(!time.contains('\n'));
        assert_eq!(message, "INFO: x=5");
        assert!(!contents.contains('\x1b'));
        terminate().unwrap();
    }

    #[test]
    fn test_ignored_types() {
        let _serial = serial();
        reset();
        let buffer = SharedBuffer::default();
        init(Some(Stream::writer(buffer.clone())), Attributes::NONE).unwrap();
        assert_eq!(ignored_types().unwrap(), LevelSet::EMPTY);
        set_ignored_types(LogLevel::Debug | LogLevel::Trace).unwrap();
        crate::debug!("hidden\n").unwrap();
        crate::trace!("hidden\n").unwrap();
        crate::info!("shown\n").unwrap();
        let contents = buffer.contents();
        assert!(!contents.contains("hidden"));
        let (_, message) = split_line(&contents);
        assert_eq!(message, "\x1b[0;37mINFO: shown\n\x1b[0m");

        let mut ignored = ignored_types().unwrap();
        ignored |= LogLevel::Info;
        set_ignored_types(ignored).unwrap();
        log(LogLevel::Info, "gone").unwrap();
        assert_eq!(buffer.contents(), contents);
        terminate().unwrap();
    }

    #[test]
    fn test_uninitialized_calls_fail() {
        let _serial = serial();
        reset();
        assert!(!is_initialized());
        assert!(matches!(
            log(LogLevel::Error, "nope"),
            Err(LoggerError::NotInitialized)
        ));
        assert!(matches!(
            set_output_stream(None),
            Err(LoggerError::NotInitialized)
        ));
        let path = temp_log_file("global_uninitialized");
        assert!(matches!(
            set_output_file(&path),
            Err(LoggerError::NotInitialized)
        ));
        assert!(!path.exists());
        assert!(matches!(
            set_ignored_types(LevelSet::all()),
            Err(LoggerError::NotInitialized)
        ));
        assert!(matches!(terminate(), Err(LoggerError::NotInitialized)));
    }

    #[test]
    fn test_calls_after_terminate_fail() {
        let _serial = serial();
        reset();
        let buffer = SharedBuffer::default();
        init(Some(Stream::writer(buffer.clone())), Attributes::NO_COLOR).unwrap();
        crate::warning!("before\n").unwrap();
        terminate().unwrap();
        assert!(matches!(
            crate::warning!("after\n"),
            Err(LoggerError::NotInitialized)
        ));
        assert!(matches!(sink_kind(), Err(LoggerError::NotInitialized)));
        assert_eq!(buffer.contents().lines().count(), 1);
    }

    #[test]
    fn test_double_init_keeps_first_logger() {
        let _serial = serial();
        reset();
        let first = SharedBuffer::default();
        let second = SharedBuffer::default();
        init(Some(Stream::writer(first.clone())), Attributes::NO_COLOR).unwrap();
        assert!(matches!(
            init(Some(Stream::writer(second.clone())), Attributes::NONE),
            Err(LoggerError::AlreadyInitialized)
        ));
        assert_eq!(attributes().unwrap(), Attributes::NO_COLOR);

        let path = temp_log_file("global_double_init");
        std::fs::write(&path, "keep me\n").unwrap();
        assert!(matches!(
            init_with_file(&path, Attributes::OVERWRITE_FILE_ON_OPEN),
            Err(LoggerError::AlreadyInitialized)
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me\n");

        crate::error!("to first\n").unwrap();
        assert!(first.contents().ends_with("] ERROR: to first\n"));
        assert_eq!(second.contents(), "");
        terminate().unwrap();
    }

    #[test]
    fn test_file_sessions_truncate_then_append() {
        let _serial = serial();
        reset();
        let path = temp_log_file("global_sessions");
        std::fs::write(&path, "stale\n").unwrap();

        init_with_file(&path, Attributes::OVERWRITE_FILE_ON_OPEN).unwrap();
        assert_eq!(sink_kind().unwrap(), SinkKind::File);
        crate::info!("one\n").unwrap();
        crate::fatal!("two\n").unwrap();
        terminate().unwrap();

        init_with_file(&path, Attributes::NONE).unwrap();
        crate::plain!("three\n").unwrap();
        terminate().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let messages: Vec<_> = contents.lines().map(|l| split_line(l).1).collect();
        assert_eq!(messages, vec!["INFO: one", "FATAL ERROR: two", "three"]);
        assert!(!contents.contains('\x1b'));
    }

    #[test]
    fn test_init_with_file_failure() {
        let _serial = serial();
        reset();
        let missing = std::env::temp_dir().join("clog_missing_dir/nested/out.log");
        assert!(matches!(
            init_with_file(&missing, Attributes::NONE),
            Err(LoggerError::FailedToOpenFile { .. })
        ));
        assert!(!is_initialized());
    }

    #[test]
    fn test_switch_between_file_and_stream() {
        let _serial = serial();
        reset();
        let buffer = SharedBuffer::default();
        let path = temp_log_file("global_switch");
        init(Some(Stream::writer(buffer.clone())), Attributes::NONE).unwrap();
        set_output_file(&path).unwrap();
        assert_eq!(sink_kind().unwrap(), SinkKind::File);
        crate::trace!("in file\n").unwrap();
        set_output_stream(Some(Stream::writer(buffer.clone()))).unwrap();
        assert_eq!(sink_kind().unwrap(), SinkKind::Console);
        crate::trace!("on console\n").unwrap();
        terminate().unwrap();

        let file = std::fs::read_to_string(&path).unwrap();
        assert_eq!(split_line(&file).1, "TRACE: in file\n");
        let console = buffer.contents();
        assert_eq!(split_line(&console).1, "\x1b[0;32mTRACE: on console\n\x1b[0m");
    }

    #[test]
    fn test_reinit_after_terminate() {
        let _serial = serial();
        reset();
        init(None, Attributes::NONE).unwrap();
        terminate().unwrap();
        let buffer = SharedBuffer::default();
        init(Some(Stream::writer(buffer.clone())), Attributes::NO_COLOR).unwrap();
        assert_eq!(ignored_types().unwrap(), LevelSet::EMPTY);
        set_attributes(Attributes::NONE).unwrap();
        crate::log!(LogLevel::Default, "{}-{}", 1, 2).unwrap();
        assert!(buffer.contents().ends_with("] \x1b[0m1-2\x1b[0m"));
        terminate().unwrap();
    }
}
