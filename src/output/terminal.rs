//! The real standard streams. Which one a level uses is fixed by [`Level::stream`](crate::level::Level::stream).

use super::{Output, terminated};
use crate::level::Stream;
use std::io::{self, Write};

/// One of the process's standard streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalOutput {
    stream: Stream,
}

impl TerminalOutput {
    #[must_use]
    pub const fn new(stream: Stream) -> Self {
        Self { stream }
    }

    /// Destination of info lines.
    #[must_use]
    pub const fn stdout() -> Self {
        Self::new(Stream::Stdout)
    }

    /// Destination of error and fatal lines.
    #[must_use]
    pub const fn stderr() -> Self {
        Self::new(Stream::Stderr)
    }

    #[must_use]
    pub const fn stream(&self) -> Stream {
        self.stream
    }
}

impl Output for TerminalOutput {
    fn write_line(&self, line: &str) -> Result<(), crate::Error> {
        let buf = terminated(line);

        // Holding the stream lock across one write_all keeps the line whole.
        match self.stream {
            Stream::Stdout => io::stdout().lock().write_all(&buf)?,
            Stream::Stderr => io::stderr().lock().write_all(&buf)?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stdout => io::stdout().flush()?,
            Stream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}
