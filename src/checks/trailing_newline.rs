use super::{CheckName, StatefulCheck};

/// Flags files whose content does not end with a newline.
///
/// Splitting `"a\n"` on newlines leaves a final empty segment, so a file ends
/// properly exactly when the last segment seen is empty.
#[derive(Debug, Clone)]
pub struct TrailingNewlineCheck {
    last_line_empty: bool,
}

impl TrailingNewlineCheck {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_line_empty: true,
        }
    }
}

impl Default for TrailingNewlineCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl StatefulCheck for TrailingNewlineCheck {
    fn name(&self) -> CheckName {
        CheckName::TrailingNewline
    }

    fn reset(&mut self) {
        // an empty file has nothing to terminate
        self.last_line_empty = true;
    }

    fn check(&mut self, line: &str, _index: usize) -> Option<String> {
        self.last_line_empty = line.is_empty();
        None
    }

    fn done(&mut self) -> Option<String> {
        let verdict = (!self.last_line_empty).then(|| "missing trailing newline".to_string());
        self.reset();
        verdict
    }
}

#[cfg(test)]
#[path = "trailing_newline_tests.rs"]
mod tests;
