use super::{
    CheckName, FilesizeCheck, LineLengthCheck, Limits, StatefulCheck, StatelessCheck,
    TabsOnlyCheck, TrailingNewlineCheck, TrailingWhitespaceCheck,
};

/// The ordered set of checks consulted for every file.
///
/// Declared order is report order for a given line. Instances are reused
/// across files, so stateful checks must be reset before each scan.
pub struct Registry {
    stateless: Vec<Box<dyn StatelessCheck>>,
    stateful: Vec<Box<dyn StatefulCheck>>,
}

impl Registry {
    /// Built-in checks with the given thresholds.
    #[must_use]
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            stateless: vec![
                Box::new(LineLengthCheck::new(limits.max_line_length)),
                Box::new(TabsOnlyCheck),
                Box::new(TrailingWhitespaceCheck),
            ],
            stateful: vec![
                Box::new(FilesizeCheck::new(limits.max_file_lines)),
                Box::new(TrailingNewlineCheck::new()),
            ],
        }
    }

    /// A registry made of arbitrary checks, in the given order.
    #[must_use]
    pub fn from_parts(
        stateless: Vec<Box<dyn StatelessCheck>>,
        stateful: Vec<Box<dyn StatefulCheck>>,
    ) -> Self {
        Self {
            stateless,
            stateful,
        }
    }

    /// Drop the named checks, keeping the relative order of the rest.
    #[must_use]
    pub fn without(mut self, disabled: &[CheckName]) -> Self {
        self.stateless.retain(|check| !disabled.contains(&check.name()));
        self.stateful.retain(|check| !disabled.contains(&check.name()));
        self
    }

    #[must_use]
    pub fn stateless(&self) -> &[Box<dyn StatelessCheck>] {
        &self.stateless
    }

    pub fn stateful_mut(&mut self) -> &mut [Box<dyn StatefulCheck>] {
        &mut self.stateful
    }

    /// Names of every registered check: stateless first, then stateful.
    #[must_use]
    pub fn names(&self) -> Vec<CheckName> {
        self.stateless
            .iter()
            .map(|check| check.name())
            .chain(self.stateful.iter().map(|check| check.name()))
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_limits(Limits::default())
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("checks", &self.names())
            .finish()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
