//! Stepwise construction. Every piece has a production default, so
//! `Logger::builder().build()` is the same logger as `Logger::new()`.

use super::{Clock, Logger};
use crate::exit::ExitHook;
use crate::output::{Output, TerminalOutput};
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub struct LoggerBuilder {
    stdout: Box<dyn Output>,
    stderr: Box<dyn Output>,
    exit: ExitHook,
    clock: Clock,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdout: Box::new(TerminalOutput::stdout()),
            stderr: Box::new(TerminalOutput::stderr()),
            exit: ExitHook::process(),
            clock: Arc::new(Utc::now),
        }
    }

    /// Replaces the destination of info lines.
    #[must_use]
    pub fn stdout(mut self, output: impl Output + 'static) -> Self {
        self.stdout = Box::new(output);
        self
    }

    /// Replaces the destination of error and fatal lines.
    #[must_use]
    pub fn stderr(mut self, output: impl Output + 'static) -> Self {
        self.stderr = Box::new(output);
        self
    }

    /// Tests pass a recorder here so `fatal` doesn't end the test binary.
    #[must_use]
    pub fn exit_hook(mut self, hook: ExitHook) -> Self {
        self.exit = hook;
        self
    }

    /// Fixed clocks make whole lines comparable in tests.
    #[must_use]
    pub fn clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            stdout: self.stdout,
            stderr: self.stderr,
            exit: self.exit,
            clock: self.clock,
        }
    }
}
