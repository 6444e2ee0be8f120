//! Terminal host for a form session.

use std::io::{self, Write};

use prefs_core::form::{Alert, AlertPresenter, SessionObserver};
use prefs_core::Settings;

/// Prints alerts and the session outcome to a writer
pub struct ConsoleHost<W> {
    out: W,
}

impl ConsoleHost<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> ConsoleHost<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    fn print(&mut self, line: &str) {
        if let Err(error) = writeln!(self.out, "{line}") {
            tracing::warn!("Failed to print to terminal: {error}");
        }
    }
}

impl<W: Write> AlertPresenter for ConsoleHost<W> {
    fn present(&mut self, alert: &Alert) {
        self.print(&format!("{}: {}", alert.title, alert.message));
    }
}

impl<W: Write> SessionObserver for ConsoleHost<W> {
    fn on_committed(&mut self, _committed: &Settings) {
        self.print("Saved preferences");
    }

    fn on_discarded(&mut self) {
        self.print("Discarded changes");
    }
}
