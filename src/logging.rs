//! Diagnostic logging to stderr via `flexi_logger`.
//!
//! Violations never go through the logger; they are written to stdout by the
//! reporter. The logger only carries progress and debug information.

use flexi_logger::{DeferredNow, Logger, LoggerHandle};
use log::Record;

use crate::error::Result;

/// Log spec for the given verbosity flags.
#[must_use]
pub const fn level_spec(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Start the global logger. Keep the returned handle alive for the whole run.
///
/// # Errors
/// Returns an error if the logger spec is invalid or a logger is already installed.
pub fn init(verbose: u8, quiet: bool) -> Result<LoggerHandle> {
    let handle = Logger::try_with_str(level_spec(verbose, quiet))?
        .log_to_stderr()
        .format(simple_format)
        .start()?;
    Ok(handle)
}

// "HH:MM:SS.mmm DBG message"
fn simple_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> std::result::Result<(), std::io::Error> {
    write!(
        w,
        "{} {} {}",
        now.format("%H:%M:%S%.3f"),
        level_abbr(record.level()),
        record.args()
    )
}

const fn level_abbr(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
