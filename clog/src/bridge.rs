use clog_core::{LogLevel, LoggerError};

use crate::global::try_with_logger;

/// Forwards `log` crate records to the global clog logger.
struct ClogBridge;

static BRIDGE: ClogBridge = ClogBridge;

impl ::log::Log for ClogBridge {
    fn enabled(&self, metadata: &::log::Metadata) -> bool {
        let level = LogLevel::from(metadata.level());
        level.is_compiled_in()
            && try_with_logger(|logger| !logger.ignored_types().contains(level)).unwrap_or(false)
    }

    fn log(&self, record: &::log::Record) {
        let level = LogLevel::from(record.level());
        // Records logged before `init` or after `terminate` are dropped.
        try_with_logger(|logger| {
            logger
                .log(level, format_args!("{}\n", record.args()))
                .ok();
        });
    }

    fn flush(&self) {}
}

/// Routes `log::error!` ... `log::trace!` to the global clog logger, one line per record.
///
/// Fails with [`LoggerError::LoggerAlreadySet`] if a `log` logger is already installed.
pub fn init_log_bridge(max_level: ::log::LevelFilter) -> Result<(), LoggerError> {
    ::log::set_logger(&BRIDGE)?;
    ::log::set_max_level(max_level);
    Ok(())
}
