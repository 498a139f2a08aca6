use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Logger setup error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

impl LineGuardError {
    /// Whether this error came from reading an input file (as opposed to setup).
    #[must_use]
    pub const fn is_file_read(&self) -> bool {
        matches!(self, Self::FileRead { .. })
    }
}

pub type Result<T> = std::result::Result<T, LineGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
