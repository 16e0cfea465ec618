//! In-memory capture. Clones share one buffer, so a test keeps a handle while the logger owns another.

use super::Output;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line written so far, without trailing newlines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.guard().clone()
    }

    /// The captured text exactly as a stream would have received it.
    #[must_use]
    pub fn contents(&self) -> String {
        self.guard().iter().fold(String::new(), |mut acc, line| {
            acc.push_str(line);
            acc.push('\n');
            acc
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    pub fn clear(&self) {
        self.guard().clear();
    }

    // A panic while pushing a String can't leave the Vec half-updated, so poison is ignored.
    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Output for MemoryOutput {
    fn write_line(&self, line: &str) -> Result<(), crate::Error> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        self.guard().push(line.to_string());
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
