use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "line-guard")]
#[command(author, version, about = "Line-oriented source style checker")]
#[command(long_about = "Checks files line by line for overly long lines, space or mixed \
    indentation, trailing whitespace, oversized files and a missing final newline.\n\n\
    Exit codes:\n  \
    0 - No violations\n  \
    1 - Violations reported\n  \
    2 - A file could not be read, or configuration error")]
pub struct Cli {
    /// Files to check, scanned in the given order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
