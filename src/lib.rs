pub mod checks;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod filesystem;
pub mod logging;
pub mod output;
pub mod runner;

pub use error::{LineGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS_FOUND: i32 = 1;
pub const EXIT_READ_ERROR: i32 = 2;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
