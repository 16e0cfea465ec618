//! The termination hook `fatal` calls after writing its line.
//!
//! Production loggers use [`ExitHook::process`]. Tests inject a recorder instead,
//! which lets the code after a `fatal` call keep running.

use std::fmt;
use std::sync::Arc;

type HookFn = dyn Fn(i32) + Send + Sync;

/// Exit code passed to the hook by every fatal call.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Cheap to clone; clones call the same function.
#[derive(Clone)]
pub struct ExitHook {
    hook: Arc<HookFn>,
    real: bool,
}

impl ExitHook {
    /// `std::process::exit`. Never returns.
    #[must_use]
    pub fn process() -> Self {
        Self {
            hook: Arc::new(exit_process),
            real: true,
        }
    }

    /// Any function taking the exit code. If it returns, so does the `fatal` call.
    #[must_use]
    pub fn new(hook: impl Fn(i32) + Send + Sync + 'static) -> Self {
        Self {
            hook: Arc::new(hook),
            real: false,
        }
    }

    pub fn call(&self, code: i32) {
        (self.hook)(code);
    }

    /// Whether this is the real process exit rather than a substitute.
    #[must_use]
    pub const fn is_process_exit(&self) -> bool {
        self.real
    }
}

fn exit_process(code: i32) {
    std::process::exit(code);
}

impl Default for ExitHook {
    fn default() -> Self {
        Self::process()
    }
}

impl fmt::Debug for ExitHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.real { "process" } else { "custom" };
        f.debug_tuple("ExitHook").field(&kind).finish()
    }
}
