/// Logs a formatted message at the given level through the global logger.
///
/// Evaluates to `Result<(), LoggerError>`. Like `print!`, no line terminator is added.
///
/// ```rust
/// use clog::{Attributes, LogLevel};
///
/// clog::init(None, Attributes::NONE).unwrap();
/// clog::log!(LogLevel::Warning, "disk {}% full\n", 93).unwrap();
/// clog::terminate().unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {
        $crate::log_with_args($level, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::FatalError, $($arg)+)
    };
}

/// Logs at the `Default` level: no header, no color.
#[macro_export]
macro_rules! plain {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Default, $($arg)+)
    };
}

/// Logs at the `Debug` level. Without `debug_assertions` the arguments are never
/// evaluated and the macro evaluates to `Ok(())`.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        (if ::std::cfg!(debug_assertions) {
            $crate::log!($crate::LogLevel::Debug, $($arg)+)
        } else {
            ::std::result::Result::<(), $crate::LoggerError>::Ok(())
        })
    };
}
