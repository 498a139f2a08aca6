use std::io::{IsTerminal, Write};

use super::{ColorMode, Reporter, Violation, ansi, is_no_color_set};

/// Writes each violation as one text line, as soon as it is reported.
///
/// Without colors the format is exactly `<path>: L<line>: <message>` or
/// `<path>: <message>`.
pub struct TextReporter<W: Write> {
    out: W,
    use_colors: bool,
    count: usize,
}

impl TextReporter<std::io::Stdout> {
    #[must_use]
    pub fn stdout(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => !is_no_color_set() && std::io::stdout().is_terminal(),
        };
        Self::with_colors(std::io::stdout(), use_colors)
    }
}

impl<W: Write> TextReporter<W> {
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self::with_colors(out, false)
    }

    #[must_use]
    pub const fn with_colors(out: W, use_colors: bool) -> Self {
        Self {
            out,
            use_colors,
            count: 0,
        }
    }

    /// Number of violations reported so far.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_colored(&mut self, violation: &Violation) -> std::io::Result<()> {
        let path = violation.path.display();
        match violation.line {
            Some(line) => writeln!(
                self.out,
                "{}{path}{}: {}L{line}{}: {}",
                ansi::BOLD,
                ansi::RESET,
                ansi::YELLOW,
                ansi::RESET,
                violation.message
            ),
            None => writeln!(
                self.out,
                "{}{path}{}: {}{}{}",
                ansi::BOLD,
                ansi::RESET,
                ansi::RED,
                violation.message,
                ansi::RESET
            ),
        }
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(&mut self, violation: &Violation) {
        self.count += 1;
        // A closed stdout (e.g. piped into `head`) shouldn't abort the scan.
        let written = if self.use_colors {
            self.write_colored(violation)
        } else {
            writeln!(self.out, "{violation}")
        };
        if let Err(e) = written {
            log::debug!("failed to write violation: {e}");
        }
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
