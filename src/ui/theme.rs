//! Visual theme and styling.

use console::Style;

/// Styles applied to an update notification.
///
/// All styles target stderr, where notifications are written.
#[derive(Debug, Clone)]
pub struct NotifierTheme {
    /// Style for box-drawing borders (yellow).
    pub border: Style,
    /// Style for the installed version (dim).
    pub current: Style,
    /// Style for the latest version (green).
    pub latest: Style,
    /// Style for the update command (cyan).
    pub command: Style,
}

impl Default for NotifierTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl NotifierTheme {
    /// Create the default coloured theme.
    pub fn new() -> Self {
        Self {
            border: Style::new().yellow().for_stderr(),
            current: Style::new().dim().for_stderr(),
            latest: Style::new().green().for_stderr(),
            command: Style::new().cyan().for_stderr(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            border: Style::new(),
            current: Style::new(),
            latest: Style::new(),
            command: Style::new(),
        }
    }

    /// Pick the coloured or plain theme for the current stderr.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }
}

/// Check if colors should be enabled on stderr.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}
