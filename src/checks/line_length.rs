use super::{CheckName, DEFAULT_MAX_LINE_LENGTH, StatelessCheck};

/// Flags lines longer than a fixed number of characters.
///
/// Length is counted in Unicode scalar values, so a tab counts as one.
#[derive(Debug, Clone, Copy)]
pub struct LineLengthCheck {
    max: usize,
}

impl LineLengthCheck {
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Default for LineLengthCheck {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINE_LENGTH)
    }
}

impl StatelessCheck for LineLengthCheck {
    fn name(&self) -> CheckName {
        CheckName::LineLength
    }

    fn check(&self, line: &str) -> Option<String> {
        // byte length bounds the char count, skip counting short lines
        if line.len() <= self.max {
            return None;
        }
        let len = line.chars().count();
        (len > self.max).then(|| format!("line too long ({len} > {} characters)", self.max))
    }
}

#[cfg(test)]
#[path = "line_length_tests.rs"]
mod tests;
