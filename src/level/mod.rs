//! The three severities the facade knows about, and the fixed stream each one writes to.

use std::fmt;
use std::str::FromStr;

/// Ordered by severity so callers can compare levels, even though nothing is filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Normal operational output, written to stdout.
    #[default]
    Info = 0,
    /// Failures the program survives, written to stderr.
    Error = 1,
    /// Written to stderr, then the process is terminated.
    Fatal = 2,
}

/// Where a level's lines go. Not configurable per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Level {
    /// Lowercase because CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }

    /// Text placed between the colorized timestamp and the message.
    ///
    /// Info lines carry no tag at all, which is why this is a separator rather than a label.
    #[must_use]
    pub const fn separator(self) -> &'static str {
        match self {
            Self::Info => ": ",
            Self::Error => " ERROR: ",
            Self::Fatal => " FATAL: ",
        }
    }

    #[must_use]
    pub const fn stream(self) -> Stream {
        match self {
            Self::Info => Stream::Stdout,
            Self::Error | Self::Fatal => Stream::Stderr,
        }
    }

    /// Only fatal ends the process.
    #[must_use]
    pub const fn terminates(self) -> bool {
        matches!(self, Self::Fatal)
    }

    /// Every level, least severe first.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Info, Self::Error, Self::Fatal]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "error" | "err" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
