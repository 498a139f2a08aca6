use super::{CheckName, DEFAULT_MAX_FILE_LINES, StatefulCheck};

/// Flags files with more lines than a fixed maximum.
///
/// The empty segment that follows a final newline is not a line: `"a\n"` and
/// `"a"` both count as one line, `""` counts as none.
#[derive(Debug, Clone)]
pub struct FilesizeCheck {
    max: usize,
    seen: usize,
    last_was_empty: bool,
}

impl FilesizeCheck {
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self {
            max,
            seen: 0,
            last_was_empty: false,
        }
    }

    const fn line_count(&self) -> usize {
        if self.last_was_empty {
            self.seen - 1
        } else {
            self.seen
        }
    }
}

impl Default for FilesizeCheck {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILE_LINES)
    }
}

impl StatefulCheck for FilesizeCheck {
    fn name(&self) -> CheckName {
        CheckName::Filesize
    }

    fn reset(&mut self) {
        self.seen = 0;
        self.last_was_empty = false;
    }

    fn check(&mut self, line: &str, _index: usize) -> Option<String> {
        self.seen += 1;
        self.last_was_empty = line.is_empty();
        None
    }

    fn done(&mut self) -> Option<String> {
        let lines = self.line_count();
        let verdict =
            (lines > self.max).then(|| format!("file too long ({lines} > {} lines)", self.max));
        self.reset();
        verdict
    }
}

#[cfg(test)]
#[path = "filesize_tests.rs"]
mod tests;
