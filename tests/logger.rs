//! Tests for the logger facade.

use chrono::{DateTime, TimeZone, Timelike, Utc};
use regex::Regex;
use stamplog::{Arg, ExitHook, Logger, MemoryOutput, Output};
use std::sync::{Arc, Mutex};

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 2, 15, 4, 5)
        .unwrap()
        .with_nanosecond(123_456_789)
        .unwrap()
}

struct Capture {
    stdout: MemoryOutput,
    stderr: MemoryOutput,
    exits: Arc<Mutex<Vec<i32>>>,
}

fn capturing_logger() -> (Logger, Capture) {
    let stdout = MemoryOutput::new();
    let stderr = MemoryOutput::new();
    let exits = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&exits);

    let logger = Logger::builder()
        .stdout(stdout.clone())
        .stderr(stderr.clone())
        .exit_hook(ExitHook::new(move |code| recorder.lock().unwrap().push(code)))
        .clock(fixed_time)
        .build();

    (
        logger,
        Capture {
            stdout,
            stderr,
            exits,
        },
    )
}

#[test]
fn info_line_exact() {
    let (logger, cap) = capturing_logger();
    logger.info("hello %s", &["world".into()]);

    assert_eq!(
        cap.stdout.lines(),
        vec!["\x1b[35m2023-01-02T15:04:05.123456789Z\x1b[0m: hello world"]
    );
    assert!(cap.stderr.is_empty());
}

#[test]
fn error_line_exact() {
    let (logger, cap) = capturing_logger();
    logger.error("code %d", &[7.into()]);

    assert_eq!(
        cap.stderr.lines(),
        vec!["\x1b[35m2023-01-02T15:04:05.123456789Z\x1b[0m ERROR: code 7"]
    );
    assert!(cap.stdout.is_empty());
    assert!(cap.exits.lock().unwrap().is_empty());
}

#[test]
fn error_with_error_value() {
    let (logger, cap) = capturing_logger();
    let err = std::io::Error::other("connection reset");
    logger.error("failed: %v", &[Arg::display(&err)]);

    let line = &cap.stderr.lines()[0];
    assert!(line.contains("ERROR: failed: connection reset"));
}

#[test]
fn fatal_writes_then_calls_hook_and_continues() {
    let (logger, cap) = capturing_logger();
    logger.fatal("test %d", &[1.into()]);

    // Still running: the recorder returned.
    let line = &cap.stderr.lines()[0];
    assert!(line.contains("FATAL: test 1"));
    assert_eq!(*cap.exits.lock().unwrap(), vec![1]);
    assert!(cap.stdout.is_empty());
}

#[test]
fn write_never_terminates() {
    let (logger, cap) = capturing_logger();
    logger.write(stamplog::Level::Fatal, "preformatted %d");

    assert!(cap.stderr.lines()[0].ends_with(" FATAL: preformatted %d"));
    assert!(cap.exits.lock().unwrap().is_empty());
}

#[test]
fn real_clock_line_shape() {
    let stdout = MemoryOutput::new();
    let logger = Logger::builder().stdout(stdout.clone()).build();
    logger.info("hello %s", &["world".into()]);

    let re = Regex::new(r"^\x1b\[35m[0-9T:\.\-]+Z\x1b\[0m: hello world$").unwrap();
    let lines = stdout.lines();
    assert_eq!(lines.len(), 1);
    assert!(re.is_match(&lines[0]), "unexpected line: {:?}", lines[0]);
}

#[test]
fn timestamps_parse_and_do_not_decrease() {
    let stdout = MemoryOutput::new();
    let logger = Logger::builder().stdout(stdout.clone()).build();
    for i in 0..100 {
        logger.info("tick %d", &[i.into()]);
    }

    let re = Regex::new(r"^\x1b\[35m([^\x1b]+)\x1b\[0m: tick \d+$").unwrap();
    let stamps: Vec<DateTime<Utc>> = stdout
        .lines()
        .iter()
        .map(|line| {
            let caps = re.captures(line).unwrap();
            DateTime::parse_from_rfc3339(&caps[1]).unwrap().with_timezone(&Utc)
        })
        .collect();

    assert_eq!(stamps.len(), 100);
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn lines_keep_call_order() {
    let (logger, cap) = capturing_logger();
    logger.info("one", &[]);
    logger.info("two", &[]);
    logger.info("three", &[]);

    let messages: Vec<String> = cap
        .stdout
        .lines()
        .iter()
        .map(|l| l.rsplit(": ").next().unwrap().to_string())
        .collect();
    assert_eq!(messages, vec!["one", "two", "three"]);
}

#[test]
fn mismatched_args_are_logged_inline() {
    let (logger, cap) = capturing_logger();
    logger.info("%d and %d", &[1.into()]);

    assert!(cap.stdout.lines()[0].ends_with(": 1 and %!d(MISSING)"));
}

struct ClosedStream;

impl Output for ClosedStream {
    fn write_line(&self, _line: &str) -> Result<(), stamplog::Error> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into())
    }

    fn flush(&self) -> Result<(), stamplog::Error> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into())
    }
}

#[test]
fn write_failures_are_swallowed() {
    let exits = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&exits);
    let logger = Logger::builder()
        .stdout(ClosedStream)
        .stderr(ClosedStream)
        .exit_hook(ExitHook::new(move |code| recorder.lock().unwrap().push(code)))
        .build();

    logger.info("dropped", &[]);
    logger.error("dropped", &[]);
    logger.fatal("still exits", &[]);

    assert_eq!(*exits.lock().unwrap(), vec![1]);
    assert!(matches!(logger.flush(), Err(stamplog::Error::Io(_))));
}

#[test]
fn macros_target_a_logger() {
    let (logger, cap) = capturing_logger();
    stamplog::info!(logger: logger, "%s has %d items", "cart", 3);
    stamplog::error!(logger: &logger, "no args");
    stamplog::fatal!(logger: logger, "bye %v", 'x',);

    assert!(cap.stdout.lines()[0].ends_with(": cart has 3 items"));
    assert!(cap.stderr.lines()[0].ends_with(" ERROR: no args"));
    assert!(cap.stderr.lines()[1].ends_with(" FATAL: bye x"));
    assert_eq!(*cap.exits.lock().unwrap(), vec![1]);
}

#[test]
fn default_logger_uses_process_exit() {
    assert!(Logger::new().exit_hook().is_process_exit());
}

#[test]
fn trailing_newline_in_message_is_not_doubled() {
    let (logger, capture) = capturing_logger();
    logger.info("done\n", &[]);
    logger.error("failed: %s\n", &["disk".into()]);

    assert_eq!(
        capture.stdout.lines(),
        vec!["\x1b[35m2023-01-02T15:04:05.123456789Z\x1b[0m: done"]
    );
    assert_eq!(
        capture.stderr.lines(),
        vec!["\x1b[35m2023-01-02T15:04:05.123456789Z\x1b[0m ERROR: failed: disk"]
    );
}
