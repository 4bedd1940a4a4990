use std::sync::LazyLock;

use chrono::format::{Item, StrftimeItems};
use colored::Colorize;
use derive_from_env::FromEnv;

/// Timestamp format matching C's `asctime`, e.g. `Sun Oct 18 09:05:01 2026`.
pub const DEFAULT_TIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

#[derive(FromEnv)]
#[from_env(prefix = "CLOG")]
#[allow(non_snake_case)]
pub struct ClogConfig {
    #[from_env(default = "false")]
    pub NO_COLOR: bool,
    #[from_env(default = "%a %b %e %H:%M:%S %Y")]
    pub TIME_FORMAT: String,
}

impl Default for ClogConfig {
    fn default() -> Self {
        Self {
            NO_COLOR: false,
            TIME_FORMAT: DEFAULT_TIME_FORMAT.into(),
        }
    }
}

impl ClogConfig {
    /// Returns the configured time format, or the default one if it is not a valid strftime string.
    pub fn time_format(&self) -> &str {
        if is_valid_time_format(&self.TIME_FORMAT) {
            &self.TIME_FORMAT
        } else {
            DEFAULT_TIME_FORMAT
        }
    }
}

pub fn is_valid_time_format(format: &str) -> bool {
    !format.is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

pub static CLOG_CONFIG: LazyLock<ClogConfig> = LazyLock::new(|| {
    ClogConfig::from_env().unwrap_or_else(|err| {
        eprintln!(
            "{} invalid clog environment ({err:?}), using defaults",
            "CLOG ERROR:".red().bold()
        );
        ClogConfig::default()
    })
});

#[test]
fn test_time_format_validation() {
    assert!(is_valid_time_format(DEFAULT_TIME_FORMAT));
    assert!(is_valid_time_format("%Y-%m-%dT%H:%M:%S%.3f"));
    assert!(!is_valid_time_format("%Y-%!"));
    assert!(!is_valid_time_format(""));
    let config = ClogConfig {
        NO_COLOR: false,
        TIME_FORMAT: "%!".into(),
    };
    assert_eq!(config.time_format(), DEFAULT_TIME_FORMAT);
}
