//! Diagnostics written to stderr: unreadable files and setup errors.
//!
//! Format: `line-guard: couldn't lint file: <path>`

use std::io::{IsTerminal, Write};
use std::path::Path;

use super::{ColorMode, ansi, is_no_color_set};

/// Prefix used on every diagnostic line.
pub const TOOL_NAME: &str = "line-guard";

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => !is_no_color_set() && std::io::stderr().is_terminal(),
        };
        Self { use_colors }
    }

    /// Creates an error output formatter with explicit color control (for testing).
    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Report that a file could not be scanned.
    pub fn print_read_failure(&self, path: &Path) {
        let mut stderr = std::io::stderr().lock();
        self.write_read_failure(&mut stderr, path);
    }

    /// Report an error that stops the whole run (bad config and the like).
    pub fn print_fatal(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_fatal(&mut stderr, message);
    }

    /// Writes the read-failure line to a writer (for testing).
    pub fn write_read_failure<W: Write>(&self, w: &mut W, path: &Path) {
        // stderr write failures have nowhere left to be reported
        if self.use_colors {
            let _ = writeln!(
                w,
                "{TOOL_NAME}: {}couldn't lint file:{} {}",
                ansi::RED,
                ansi::RESET,
                path.display()
            );
        } else {
            let _ = writeln!(w, "{TOOL_NAME}: couldn't lint file: {}", path.display());
        }
    }

    /// Writes a fatal error line to a writer (for testing).
    pub fn write_fatal<W: Write>(&self, w: &mut W, message: &str) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{TOOL_NAME}: {}{}error:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "{TOOL_NAME}: error: {message}");
        }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
