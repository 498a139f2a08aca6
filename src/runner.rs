use std::path::{Path, PathBuf};

use log::info;

use crate::engine::ScanEngine;
use crate::error::LineGuardError;
use crate::filesystem::FileSystem;
use crate::output::Reporter;
use crate::{EXIT_READ_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND};

/// What happened across one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub scanned: usize,
    pub unreadable: Vec<PathBuf>,
}

impl RunSummary {
    /// Exit code given how many violations the reporter saw.
    #[must_use]
    pub fn exit_code(&self, violations: usize) -> i32 {
        if !self.unreadable.is_empty() {
            EXIT_READ_ERROR
        } else if violations > 0 {
            EXIT_VIOLATIONS_FOUND
        } else {
            EXIT_SUCCESS
        }
    }
}

/// Scan `files` in order. A file that cannot be read is passed to
/// `on_read_failure` and the run moves on to the next one.
pub fn scan_all<F, R>(
    engine: &mut ScanEngine<F>,
    files: &[PathBuf],
    reporter: &mut R,
    mut on_read_failure: impl FnMut(&Path, &LineGuardError),
) -> RunSummary
where
    F: FileSystem,
    R: Reporter,
{
    let mut summary = RunSummary::default();

    for path in files {
        match engine.scan_file(path, reporter) {
            Ok(()) => summary.scanned += 1,
            Err(e) => {
                info!("{e}");
                on_read_failure(path, &e);
                summary.unreadable.push(path.clone());
            }
        }
    }

    info!(
        "scanned {} file(s), {} unreadable",
        summary.scanned,
        summary.unreadable.len()
    );
    summary
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
