//! Constant ANSI escape sequences.

/// Clear entire screen.
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// Clear from cursor to end of line.
pub const CLEAR_LINE_RIGHT: &str = "\x1b[K";

/// Hide cursor.
pub const CURSOR_HIDE: &str = "\x1b[?25l";

/// Show cursor.
pub const CURSOR_SHOW: &str = "\x1b[?25h";

/// Move cursor to home position (1,1).
pub const CURSOR_HOME: &str = "\x1b[H";

/// Push the cursor as far right and down as the terminal allows.
///
/// `C` and `B` stop at the screen edge, unlike `H` whose behaviour past the
/// edge is undefined.
pub const CURSOR_FAR_CORNER: &str = "\x1b[999C\x1b[999B";

/// Device status report: ask for the cursor position (reply `ESC [ r ; c R`).
pub const REQUEST_CURSOR_POSITION: &str = "\x1b[6n";

/// Line terminator inside a frame (raw mode disables output post-processing).
pub const NEWLINE: &str = "\r\n";

/// Attribute sequences.
pub mod attr {
    /// Inverse video.
    pub const INVERSE: &str = "\x1b[7m";
    /// Reset all attributes.
    pub const RESET: &str = "\x1b[m";
}

/// Color reset sequences.
pub mod color {
    /// Reset foreground to default.
    pub const FG_DEFAULT: &str = "\x1b[39m";
}
