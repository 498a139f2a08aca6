use std::path::Path;

use log::{debug, info};

use crate::error::{LineGuardError, Result};
use crate::filesystem::{FileSystem, RealFileSystem};

use super::Config;

/// Name of the per-project configuration file.
pub const LOCAL_CONFIG_NAME: &str = ".line-guard.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or invalid.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Loads configuration from the filesystem.
///
/// Looks for `.line-guard.toml` in the current directory and falls back to
/// `Config::default()` if there is none.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn parse_config(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(LineGuardError::from)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        let local = self.fs.current_dir()?.join(LOCAL_CONFIG_NAME);
        if self.fs.exists(&local) {
            return self.load_from_path(&local);
        }
        debug!("no {LOCAL_CONFIG_NAME} found, using defaults");
        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        if !self.fs.exists(path) {
            return Err(LineGuardError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = self.fs.read_to_string(path)?;
        let config = Self::parse_config(&content)?;
        info!("loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
