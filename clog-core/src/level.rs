use std::{
    fmt,
    ops::{BitOr, BitOrAssign},
};

use colored::Color;

/// Level of a single log call.
///
/// Every level owns a distinct bit so that a set of levels ([`LevelSet`]) can be built
/// from them. A level passed to a log call is always exactly one of these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum LogLevel {
    Info = 1,
    Trace = 2,
    Warning = 4,
    Error = 8,
    FatalError = 16,
    /// No header and no color, behaves like a plain `print!` with a timestamp.
    Default = 32,
    /// Only written in builds with `debug_assertions`.
    Debug = 64,
}

impl LogLevel {
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Info,
        LogLevel::Trace,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::FatalError,
        LogLevel::Default,
        LogLevel::Debug,
    ];

    /// Bit value of the level inside a [`LevelSet`].
    pub const fn bit(self) -> u64 {
        self as u64
    }

    /// Header written in front of the message.
    pub const fn header(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO: ",
            LogLevel::Trace => "TRACE: ",
            LogLevel::Warning => "WARNING: ",
            LogLevel::Error => "ERROR: ",
            LogLevel::FatalError => "FATAL ERROR: ",
            LogLevel::Default => "",
            LogLevel::Debug => "DEBUG: ",
        }
    }

    /// Terminal color and boldness of the level. `None` means the terminal default.
    pub const fn color(self) -> Option<(Color, bool)> {
        match self {
            LogLevel::Info => Some((Color::White, false)),
            LogLevel::Trace => Some((Color::Green, false)),
            LogLevel::Warning => Some((Color::Yellow, true)),
            LogLevel::Error => Some((Color::Red, true)),
            LogLevel::FatalError => Some((Color::BrightRed, true)),
            LogLevel::Default => None,
            LogLevel::Debug => Some((Color::Green, true)),
        }
    }

    /// Whether messages of this level can be written in the current build.
    pub const fn is_compiled_in(self) -> bool {
        !matches!(self, LogLevel::Debug) || cfg!(debug_assertions)
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warning,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Trace => LogLevel::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Info => "INFO",
            LogLevel::Trace => "TRACE",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::FatalError => "FATAL ERROR",
            LogLevel::Default => "DEFAULT",
            LogLevel::Debug => "DEBUG",
        };
        f.write_str(name)
    }
}

/// A set of levels, used to filter out log calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LevelSet(u64);

impl LevelSet {
    pub const EMPTY: LevelSet = LevelSet(0);

    /// Builds a set from raw level bits. Unknown bits are dropped.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits & Self::all().0)
    }

    pub const fn all() -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < LogLevel::ALL.len() {
            bits |= LogLevel::ALL[i].bit();
            i += 1;
        }
        Self(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, level: LogLevel) -> bool {
        self.0 & level.bit() != 0
    }

    pub const fn with(self, level: LogLevel) -> Self {
        Self(self.0 | level.bit())
    }

    pub const fn without(self, level: LogLevel) -> Self {
        Self(self.0 & !level.bit())
    }

    pub fn iter(self) -> impl Iterator<Item = LogLevel> {
        LogLevel::ALL.into_iter().filter(move |l| self.contains(*l))
    }
}

impl From<LogLevel> for LevelSet {
    fn from(level: LogLevel) -> Self {
        Self(level.bit())
    }
}

impl<const N: usize> From<[LogLevel; N]> for LevelSet {
    fn from(levels: [LogLevel; N]) -> Self {
        levels.into_iter().collect()
    }
}

impl FromIterator<LogLevel> for LevelSet {
    fn from_iter<I: IntoIterator<Item = LogLevel>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, LevelSet::with)
    }
}

impl BitOr for LogLevel {
    type Output = LevelSet;
    fn bitor(self, rhs: LogLevel) -> LevelSet {
        LevelSet::from(self).with(rhs)
    }
}

impl BitOr<LogLevel> for LevelSet {
    type Output = LevelSet;
    fn bitor(self, rhs: LogLevel) -> LevelSet {
        self.with(rhs)
    }
}

impl BitOr for LevelSet {
    type Output = LevelSet;
    fn bitor(self, rhs: LevelSet) -> LevelSet {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign<LogLevel> for LevelSet {
    fn bitor_assign(&mut self, rhs: LogLevel) {
        *self = self.with(rhs);
    }
}

/// Attribute flags of a logger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Attributes(u64);

impl Attributes {
    pub const NONE: Attributes = Attributes(0);
    /// Never write color escapes, even on a console.
    pub const NO_COLOR: Attributes = Attributes(1);
    /// Truncate files when opening them instead of appending.
    pub const OVERWRITE_FILE_ON_OPEN: Attributes = Attributes(2);

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits & (Self::NO_COLOR.0 | Self::OVERWRITE_FILE_ON_OPEN.0))
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn contains(self, other: Attributes) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Attributes) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn difference(self, other: Attributes) -> Self {
        Self(self.0 & !other.0)
    }
}

impl BitOr for Attributes {
    type Output = Attributes;
    fn bitor(self, rhs: Attributes) -> Attributes {
        self.union(rhs)
    }
}

impl BitOrAssign for Attributes {
    fn bitor_assign(&mut self, rhs: Attributes) {
        *self = self.union(rhs);
    }
}
