//! Any `Write` implementor as a destination: a file, a socket, a pipe to another process.

use super::{Output, terminated};
use std::io::Write;
use std::sync::Mutex;

/// Serializes writes through a mutex so each line lands whole.
#[derive(Debug)]
pub struct WriterOutput<W> {
    inner: Mutex<W>,
}

impl<W: Write + Send> WriterOutput<W> {
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    /// Hands the writer back, e.g. to inspect a buffer after logging.
    ///
    /// # Errors
    /// Returns [`crate::Error::Poisoned`] if a writer thread panicked mid-write.
    pub fn into_inner(self) -> Result<W, crate::Error> {
        self.inner.into_inner().map_err(|_| crate::Error::Poisoned)
    }
}

impl<W: Write + Send> Output for WriterOutput<W> {
    fn write_line(&self, line: &str) -> Result<(), crate::Error> {
        let mut writer = self.inner.lock().map_err(|_| crate::Error::Poisoned)?;
        writer.write_all(&terminated(line))?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        let mut writer = self.inner.lock().map_err(|_| crate::Error::Poisoned)?;
        writer.flush()?;
        Ok(())
    }
}
