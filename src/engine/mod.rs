use std::path::Path;

use log::{debug, trace};

use crate::checks::Registry;
use crate::error::{LineGuardError, Result};
use crate::filesystem::{FileSystem, RealFileSystem};
use crate::output::{Reporter, Violation};

/// Drives every registered check over one file at a time.
///
/// Files are scanned strictly one after another; the registry's stateful
/// checks are shared by all scans and reset at the start of each one.
#[derive(Debug)]
pub struct ScanEngine<F: FileSystem = RealFileSystem> {
    registry: Registry,
    fs: F,
}

impl ScanEngine<RealFileSystem> {
    #[must_use]
    pub const fn new(registry: Registry) -> Self {
        Self {
            registry,
            fs: RealFileSystem,
        }
    }
}

impl Default for ScanEngine<RealFileSystem> {
    fn default() -> Self {
        Self::new(Registry::default())
    }
}

impl<F: FileSystem> ScanEngine<F> {
    #[must_use]
    pub const fn with_fs(registry: Registry, fs: F) -> Self {
        Self { registry, fs }
    }

    /// Read `path` and report every violation found in it.
    ///
    /// # Errors
    /// Returns `LineGuardError::FileRead` if the file cannot be read. Nothing
    /// is reported for that file in this case. Invalid UTF-8 is not an error.
    pub fn scan_file<R: Reporter>(&mut self, path: &Path, reporter: &mut R) -> Result<()> {
        let bytes = self
            .fs
            .read(path)
            .map_err(|source| LineGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        // content encoding never fails a scan; invalid sequences become U+FFFD
        let content = String::from_utf8_lossy(&bytes);
        self.scan_source(path, &content, reporter);
        Ok(())
    }

    /// Run all checks over already-loaded `content`, reporting against `path`.
    pub fn scan_source<R: Reporter>(&mut self, path: &Path, content: &str, reporter: &mut R) {
        debug!("scanning {}", path.display());

        for check in self.registry.stateful_mut() {
            trace!("reset {}", check.name());
            check.reset();
        }

        let mut line_count = 0;
        for (index, line) in content.split('\n').enumerate() {
            line_count += 1;
            self.check_line(path, index, line, reporter);
        }

        for check in self.registry.stateful_mut() {
            if let Some(message) = check.done() {
                reporter.report(&Violation::whole_file(path, message));
            }
        }

        debug!("finished {} ({line_count} segments)", path.display());
    }

    fn check_line<R: Reporter>(
        &mut self,
        path: &Path,
        index: usize,
        line: &str,
        reporter: &mut R,
    ) {
        for check in self.registry.stateless() {
            if let Some(message) = check.check(line) {
                reporter.report(&Violation::at_line(path, index + 1, message));
            }
        }

        for check in self.registry.stateful_mut() {
            if let Some(message) = check.check(line, index) {
                reporter.report(&Violation::whole_file(path, message));
            }
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
