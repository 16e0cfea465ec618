//! Where formatted lines end up. The facade only ever talks to the [`Output`] trait,
//! so tests and embedders can capture lines without touching the real streams.

mod memory;
mod terminal;
mod writer;

pub use memory::MemoryOutput;
pub use terminal::TerminalOutput;
pub use writer::WriterOutput;

/// `Send + Sync` so one logger can be shared across threads.
pub trait Output: Send + Sync {
    /// Writes `line` followed by a newline as a single write, so concurrent lines never interleave.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write_line(&self, line: &str) -> Result<(), crate::Error>;

    /// Fatal flushes before terminating so nothing is lost on exit.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}

/// Appends the newline up front so the line goes out in one `write_all`.
/// A message that already ends in a newline doesn't get a second one.
pub(crate) fn terminated(line: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(line.len() + 1);
    buf.extend_from_slice(line.as_bytes());
    if !line.ends_with('\n') {
        buf.push(b'\n');
    }
    buf
}
