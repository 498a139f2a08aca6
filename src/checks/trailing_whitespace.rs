use super::{CheckName, StatelessCheck};

#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingWhitespaceCheck;

impl StatelessCheck for TrailingWhitespaceCheck {
    fn name(&self) -> CheckName {
        CheckName::TrailingWhitespace
    }

    fn check(&self, line: &str) -> Option<String> {
        line.ends_with([' ', '\t']).then(|| "trailing whitespace".to_string())
    }
}

#[cfg(test)]
#[path = "trailing_whitespace_tests.rs"]
mod tests;
