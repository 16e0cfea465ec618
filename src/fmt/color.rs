//! SGR escapes for the timestamp. It uses the plain `35` code rather than a
//! 24-bit color so it renders the same on every terminal palette.

/// An ANSI foreground color, held as its SGR parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u8);

impl Color {
    pub const MAGENTA: Self = Self(35);

    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    /// SGR parameter for this color as a foreground.
    #[must_use]
    pub const fn fg_code(self) -> u8 {
        self.0
    }

    /// Callers shouldn't hand-build `\x1b[..m` sequences.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[{}m", self.fg_code())
    }
}

/// Fixed color of every timestamp. There is no switch to turn it off.
pub const TIMESTAMP_COLOR: Color = Color::MAGENTA;

#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    let fg = color.fg_ansi();
    let reset = Color::RESET;
    format!("{fg}{text}{reset}")
}
