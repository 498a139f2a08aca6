mod filesize;
mod line_length;
mod registry;
mod tabs_only;
mod trailing_newline;
mod trailing_whitespace;

pub use filesize::FilesizeCheck;
pub use line_length::LineLengthCheck;
pub use registry::Registry;
pub use tabs_only::TabsOnlyCheck;
pub use trailing_newline::TrailingNewlineCheck;
pub use trailing_whitespace::TrailingWhitespaceCheck;

use serde::Deserialize;

/// Default maximum line length, in characters.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 80;

/// Default maximum number of lines per file.
pub const DEFAULT_MAX_FILE_LINES: usize = 1000;

/// A per-line rule with no memory between invocations.
pub trait StatelessCheck {
    fn name(&self) -> CheckName;

    /// Inspect one line (newline already stripped).
    ///
    /// Returns the violation message, or `None` if the line is fine.
    fn check(&self, line: &str) -> Option<String>;
}

/// A rule that accumulates information across all lines of one file.
///
/// The engine drives every instance through `reset`, then `check` for each
/// line in order, then `done` exactly once.
pub trait StatefulCheck {
    fn name(&self) -> CheckName;

    /// Clear all accumulated state before a new file.
    fn reset(&mut self);

    /// Observe one line. A returned message is reported without a line number.
    fn check(&mut self, line: &str, index: usize) -> Option<String>;

    /// Render the whole-file verdict once every line has been seen.
    fn done(&mut self) -> Option<String>;
}

/// Stable identifiers for the built-in checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckName {
    LineLength,
    TabsOnly,
    TrailingWhitespace,
    Filesize,
    TrailingNewline,
}

impl CheckName {
    pub const ALL: [Self; 5] = [
        Self::LineLength,
        Self::TabsOnly,
        Self::TrailingWhitespace,
        Self::Filesize,
        Self::TrailingNewline,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LineLength => "line-length",
            Self::TabsOnly => "tabs-only",
            Self::TrailingWhitespace => "trailing-whitespace",
            Self::Filesize => "filesize",
            Self::TrailingNewline => "trailing-newline",
        }
    }
}

impl std::fmt::Display for CheckName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CheckName {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("Unknown check: {s}"))
    }
}

/// Thresholds used by the built-in checks.
///
/// These are internal defaults; only library callers (tests mostly) substitute them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_line_length: usize,
    pub max_file_lines: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            max_file_lines: DEFAULT_MAX_FILE_LINES,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
