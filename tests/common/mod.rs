#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the line-guard binary.
#[macro_export]
macro_rules! line_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("line-guard"))
    };
}

/// A temporary directory holding files to check.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.line-guard.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".line-guard.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Tab-indented source with no style problems.
pub const CLEAN_SOURCE: &str = "package main\n\nfunc main() {\n\tprintln(\"hi\")\n}\n";
