//! Colored terminal output.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use std::io::{IsTerminal, Write};

/// Writes user-facing progress to stdout and errors to stderr.
///
/// Quiet mode suppresses everything except errors; verbose mode adds
/// [`verbose`](Self::verbose) lines.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
    color: ColorChoice,
}

impl OutputManager {
    /// Creates an output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        let color = if std::io::stdout().is_terminal() {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            verbose,
            quiet,
            color,
        }
    }

    fn write(&self, mut stream: StandardStream, color: Option<Color>, bold: bool, message: &str) {
        let mut spec = ColorSpec::new();
        spec.set_fg(color).set_bold(bold);
        // Write errors (e.g. a closed pipe) are ignored.
        let _ = stream.set_color(&spec);
        let _ = write!(stream, "{message}");
        let _ = stream.reset();
        let _ = writeln!(stream);
    }

    fn stdout(&self, color: Option<Color>, bold: bool, message: &str) {
        if !self.quiet {
            self.write(StandardStream::stdout(self.color), color, bold, message);
        }
    }

    /// Section header.
    pub fn section(&self, title: &str) {
        self.stdout(Some(Color::Cyan), true, title);
    }

    /// A pipeline step.
    pub fn progress(&self, message: &str) {
        self.stdout(Some(Color::Blue), false, &format!("==> {message}"));
    }

    /// Indented detail line.
    pub fn indent(&self, message: &str) {
        self.stdout(None, false, &format!("    {message}"));
    }

    /// Success line.
    pub fn success(&self, message: &str) {
        self.stdout(Some(Color::Green), true, &format!("✓ {message}"));
    }

    /// Warning line.
    pub fn warn(&self, message: &str) {
        self.stdout(Some(Color::Yellow), false, &format!("warning: {message}"));
    }

    /// Detail shown only in verbose mode.
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            self.stdout(Some(Color::White), false, message);
        }
    }

    /// Error line on stderr; never suppressed.
    pub fn error(&self, message: &str) {
        let color = if std::io::stderr().is_terminal() {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        self.write(StandardStream::stderr(color), Some(Color::Red), true, message);
    }
}
