//! `stamplog` binary: one log line per invocation.
//!
//! Usage:
//!   stamplog info  <format> [args...]    Write to stdout
//!   stamplog error <format> [args...]    Write to stderr
//!   stamplog fatal <format> [args...]    Write to stderr, exit 1
//!   stamplog --strict <level> ...        Fail (exit 2) on format/argument mismatch
//!
//! Levels are case-insensitive; `err` is accepted for `error`.

use clap::Parser;
use stamplog::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli, stamplog::global::logger())
}
