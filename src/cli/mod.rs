//! Command line front-end: shell scripts get the same line format as Rust callers.
//!
//! ```text
//! stamplog [--strict] <LEVEL> <FORMAT> [ARGS]...
//! ```

use crate::fmt::{Arg, try_sprintf};
use crate::level::Level;
use crate::logger::Logger;
use clap::Parser;
use std::process::ExitCode;

/// Exit status when `--strict` rejects a format.
pub const STRICT_FAILURE: u8 = 2;

/// stamplog - timestamped logging from the command line.
#[derive(Parser)]
#[command(
    name = "stamplog",
    version,
    about = "Write timestamped info/error/fatal lines"
)]
pub struct Cli {
    /// Reject format/argument mismatches instead of logging inline diagnostics
    #[arg(long)]
    pub strict: bool,

    /// info (stdout), error (stderr) or fatal (stderr, then exit 1)
    #[arg(value_parser = parse_level)]
    pub level: Level,

    /// printf-style format, e.g. "copied %d files to %s"
    #[arg(allow_hyphen_values = true)]
    pub format: String,

    /// Values for the format verbs; numbers and true/false are typed automatically
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub args: Vec<String>,
}

fn parse_level(s: &str) -> Result<Level, String> {
    s.parse().map_err(|e| {
        let expected = Level::all().map(Level::as_str).join(", ");
        format!("{e} (expected one of: {expected})")
    })
}

/// Logs the requested line through `logger`.
///
/// A fatal line only comes back here when the logger's exit hook returns.
#[must_use]
pub fn run(cli: &Cli, logger: &Logger) -> ExitCode {
    let args: Vec<Arg<'_>> = cli.args.iter().map(|a| Arg::parse_typed(a)).collect();

    if cli.strict
        && let Err(e) = try_sprintf(&cli.format, &args)
    {
        logger.error(
            "invalid format %q: %v",
            &[Arg::from(&cli.format), Arg::display(&e)],
        );
        return ExitCode::from(STRICT_FAILURE);
    }

    logger.log(cli.level, &cli.format, &args);

    if cli.level.terminates() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
