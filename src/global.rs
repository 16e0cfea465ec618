//! The process-wide default logger behind the free functions and the `info!`/`error!`/`fatal!` macros.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if several
//! threads log before anyone calls [`init`].
//!
//! The default logger's exit hook can be swapped with [`replace_exit_hook`]. The swap is
//! process-wide: it is meant for single-threaded test setup, and a `fatal` running on
//! another thread at the same moment may see either hook.

use crate::exit::ExitHook;
use crate::fmt::{Arg, sprintf};
use crate::level::Level;
use crate::logger::Logger;
use std::sync::{OnceLock, PoisonError, RwLock};

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();
static EXIT_OVERRIDE: RwLock<Option<ExitHook>> = RwLock::new(None);

/// Installs `logger` as the default. Only the first call takes effect.
///
/// # Errors
/// Hands `logger` back if a default is already in place (installed, or created lazily by an earlier log call).
pub fn init(logger: Logger) -> Result<(), Logger> {
    DEFAULT_LOGGER.set(logger)
}

/// The default logger, created with real streams and real exit on first use.
pub fn logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::new)
}

pub fn info(format: &str, args: &[Arg<'_>]) {
    logger().info(format, args);
}

pub fn error(format: &str, args: &[Arg<'_>]) {
    logger().error(format, args);
}

/// Writes the FATAL line, then exits through the override hook if one is installed,
/// otherwise through the default logger's own hook.
pub fn fatal(format: &str, args: &[Arg<'_>]) {
    let logger = logger();
    logger.write(Level::Fatal, &sprintf(format, args));

    logger.terminate(&exit_hook());
}

/// The hook the next default-logger `fatal` will call.
pub fn exit_hook() -> ExitHook {
    EXIT_OVERRIDE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_else(|| logger().exit_hook().clone())
}

/// Routes the default logger's fatal calls to `hook` until the guard is dropped.
///
/// Dropping the guard restores whatever was installed before, so nested
/// replacements unwind in order and nothing leaks into the next test.
#[must_use = "the previous hook is restored as soon as the guard is dropped"]
pub fn replace_exit_hook(hook: ExitHook) -> ExitHookGuard {
    let mut slot = EXIT_OVERRIDE.write().unwrap_or_else(PoisonError::into_inner);
    let previous = slot.replace(hook);
    ExitHookGuard { previous }
}

/// Restores the previous exit hook on drop.
#[derive(Debug)]
pub struct ExitHookGuard {
    previous: Option<ExitHook>,
}

impl Drop for ExitHookGuard {
    fn drop(&mut self) {
        let mut slot = EXIT_OVERRIDE.write().unwrap_or_else(PoisonError::into_inner);
        *slot = self.previous.take();
    }
}
