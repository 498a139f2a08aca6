mod error_output;
mod text;

pub use error_output::{ErrorOutput, TOOL_NAME};
pub use text::TextReporter;

use std::path::{Path, PathBuf};

/// A reported style issue, scoped to a line or to the whole file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: PathBuf,
    /// 1-based line number; `None` for whole-file violations.
    pub line: Option<usize>,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn at_line(path: &Path, line: usize, message: String) -> Self {
        Self {
            path: path.to_path_buf(),
            line: Some(line),
            message,
        }
    }

    #[must_use]
    pub fn whole_file(path: &Path, message: String) -> Self {
        Self {
            path: path.to_path_buf(),
            line: None,
            message,
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}: L{line}: {}", self.path.display(), self.message),
            None => write!(f, "{}: {}", self.path.display(), self.message),
        }
    }
}

/// Sink for violations, called once per finding in discovery order.
pub trait Reporter {
    fn report(&mut self, violation: &Violation);
}

impl Reporter for Vec<Violation> {
    fn report(&mut self, violation: &Violation) {
        self.push(violation.clone());
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

fn is_no_color_set() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
