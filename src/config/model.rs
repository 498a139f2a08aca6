use serde::Deserialize;

use crate::checks::CheckName;

/// Contents of a `.line-guard.toml` file.
///
/// Thresholds are deliberately absent: unknown keys such as `max_line_length`
/// are rejected at parse time.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub checks: ChecksConfig,
}

/// Which checks run [checks].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChecksConfig {
    /// Checks removed from the registry, by kebab-case name.
    #[serde(default)]
    pub disable: Vec<CheckName>,
}

impl Config {
    #[must_use]
    pub fn disabled_checks(&self) -> &[CheckName] {
        &self.checks.disable
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
