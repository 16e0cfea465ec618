//! Everything that turns a call into line text: the colorized timestamp, the printf-style
//! message, and the level separator between them.

mod color;
pub mod printf;
pub mod timestamp;

pub use color::{Color, TIMESTAMP_COLOR, colorize};
pub use printf::{Arg, FormatError, sprintf, try_sprintf};

use crate::level::Level;
use chrono::{DateTime, Utc};

/// Assembles `<colorized-ts><separator><message>` without the trailing newline.
#[must_use]
pub fn format_line(level: Level, ts: &DateTime<Utc>, message: &str) -> String {
    let stamp = timestamp::colorized(ts);
    let separator = level.separator();
    format!("{stamp}{separator}{message}")
}
