use std::fmt::{self, Write};

use chrono::Local;

use crate::{config::DEFAULT_TIME_FORMAT, level::LogLevel};

/// Escape resetting the terminal color.
pub const RESET: &str = "\x1b[0m";

/// Escape starting the color of `level`. Levels without a color get [`RESET`].
pub fn color_escape(level: LogLevel) -> String {
    match level.color() {
        Some((color, bold)) => format!("\x1b[{};{}m", u8::from(bold), color.to_fg_str()),
        None => RESET.into(),
    }
}

/// Current local time rendered with `format`, without line breaks.
pub fn timestamp(format: &str) -> String {
    let now = Local::now();
    let mut time = String::new();
    if write!(time, "{}", now.format(format)).is_err() {
        time.clear();
        write!(time, "{}", now.format(DEFAULT_TIME_FORMAT)).ok();
    }
    time.retain(|c| c != '\n' && c != '\r');
    time
}

/// Renders the user message. Fails if one of the arguments' formatting impls fails.
pub fn format_message(args: fmt::Arguments<'_>) -> Result<String, fmt::Error> {
    if let Some(message) = args.as_str() {
        return Ok(message.to_owned());
    }
    let mut message = String::new();
    message.write_fmt(args)?;
    Ok(message)
}

/// Composes `[<time>] <color><header><message><reset>`, colors only when `color` is set.
pub fn format_log(time: &str, level: LogLevel, message: &str, color: bool) -> String {
    let header = level.header();
    if color {
        let escape = color_escape(level);
        format!("[{time}] {escape}{header}{message}{RESET}")
    } else {
        format!("[{time}] {header}{message}")
    }
}
