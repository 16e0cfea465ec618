//! The facade: `info`, `error` and `fatal` interpolate a printf-style message, stamp it,
//! and write one line to the level's stream.

mod builder;

pub use builder::LoggerBuilder;

use crate::exit::{ExitHook, FATAL_EXIT_CODE};
use crate::fmt::{Arg, format_line, sprintf};
use crate::level::{Level, Stream};
use crate::output::Output;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Source of "now" for timestamps.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Immutable after build, so a shared `&Logger` can log from any thread without extra locking.
pub struct Logger {
    stdout: Box<dyn Output>,
    stderr: Box<dyn Output>,
    exit: ExitHook,
    clock: Clock,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Real stdout/stderr, real process exit, system clock.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Shared path of the three level methods. A `Fatal` level terminates here too.
    pub fn log(&self, level: Level, format: &str, args: &[Arg<'_>]) {
        let message = sprintf(format, args);
        self.write(level, &message);

        if level.terminates() {
            self.terminate(&self.exit);
        }
    }

    /// Writes to stdout.
    pub fn info(&self, format: &str, args: &[Arg<'_>]) {
        self.log(Level::Info, format, args);
    }

    /// Writes to stderr and returns.
    pub fn error(&self, format: &str, args: &[Arg<'_>]) {
        self.log(Level::Error, format, args);
    }

    /// Writes to stderr, then calls the exit hook with code 1.
    ///
    /// With the process hook this never returns. A substituted hook that returns
    /// hands control back to the caller.
    pub fn fatal(&self, format: &str, args: &[Arg<'_>]) {
        self.log(Level::Fatal, format, args);
    }

    /// Writes an already-formatted message. Never terminates, whatever the level.
    ///
    /// Write failures are dropped: the facade has no error channel.
    pub fn write(&self, level: Level, message: &str) {
        let now = (self.clock)();
        let line = format_line(level, &now, message);
        let _ = self.output(level.stream()).write_line(&line);
    }

    /// Flushes both streams, then hands the fatal exit code to `hook`.
    pub(crate) fn terminate(&self, hook: &ExitHook) {
        let _ = self.flush();
        hook.call(FATAL_EXIT_CODE);
    }

    /// # Errors
    /// Returns the first I/O error from either stream.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.stdout.flush()?;
        self.stderr.flush()?;
        Ok(())
    }

    #[must_use]
    pub const fn exit_hook(&self) -> &ExitHook {
        &self.exit
    }

    fn output(&self, stream: Stream) -> &dyn Output {
        match stream {
            Stream::Stdout => self.stdout.as_ref(),
            Stream::Stderr => self.stderr.as_ref(),
        }
    }
}
