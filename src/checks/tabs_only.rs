use super::{CheckName, StatelessCheck};

/// Requires indentation to be made of tabs only.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabsOnlyCheck;

impl StatelessCheck for TabsOnlyCheck {
    fn name(&self) -> CheckName {
        CheckName::TabsOnly
    }

    fn check(&self, line: &str) -> Option<String> {
        let indent_len = line.len() - line.trim_start_matches([' ', '\t']).len();
        let indent = &line[..indent_len];

        let has_spaces = indent.contains(' ');
        let has_tabs = indent.contains('\t');

        match (has_tabs, has_spaces) {
            (true, true) => Some("mixed tabs and spaces in indentation".to_string()),
            (false, true) => Some("indentation uses spaces, tabs required".to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "tabs_only_tests.rs"]
mod tests;
