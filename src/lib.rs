//! `stamplog` - timestamped, colorized info/error/fatal logging.
//!
//! Every call writes exactly one line. Info goes to stdout, error and fatal to
//! stderr, each prefixed with a magenta RFC 3339 UTC timestamp with nanosecond
//! precision. Fatal then hands exit code 1 to a termination hook, which is
//! `std::process::exit` unless a test swapped it out.
//!
//! # Example
//!
//! ```no_run
//! use stamplog::{Logger, info, error};
//!
//! info!("hello %s", "world");
//! // \x1b[35m2023-01-02T15:04:05.123456789Z\x1b[0m: hello world
//!
//! let logger = Logger::new();
//! error!(logger: logger, "failed: %v", stamplog::Arg::display(&"disk full"));
//! // \x1b[35m2023-01-02T15:04:05.2Z\x1b[0m ERROR: failed: disk full
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `stamplog` binary for shell scripts

pub mod error;
pub mod exit;
pub mod fmt;
pub mod global;
pub mod level;
pub mod logger;
mod macros;
pub mod output;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::Error;
pub use exit::{ExitHook, FATAL_EXIT_CODE};
pub use fmt::{Arg, FormatError, sprintf, try_sprintf};
pub use global::{ExitHookGuard, replace_exit_hook};
pub use global::{error, fatal, info};
pub use level::{Level, Stream};
pub use logger::{Logger, LoggerBuilder};
pub use output::{MemoryOutput, Output, TerminalOutput, WriterOutput};
