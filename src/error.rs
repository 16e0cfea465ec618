//! Unified error type for stamplog's fallible layers (outputs and strict formatting).
//!
//! The logging calls themselves never return these; they are best effort.

use crate::fmt::FormatError;

/// Error type for stamplog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from the underlying stream or writer.
    Io(std::io::Error),
    /// Format string and arguments don't agree.
    Format(FormatError),
    /// A writer's lock was poisoned by a panic in another thread.
    Poisoned,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Format(e) => write!(f, "format error: {e}"),
            Self::Poisoned => write!(f, "output lock poisoned"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Format(e) => Some(e),
            Self::Poisoned => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<FormatError> for Error {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}
