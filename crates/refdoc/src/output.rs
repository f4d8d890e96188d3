//! Colored terminal output utilities.

use console::{Style, Term};

/// Terminal output for the CLI.
///
/// Status lines go to stderr. Command results written with [`Output::data`]
/// go to stdout so they can be piped.
pub(crate) struct Output {
    stderr: Term,
    stdout: Term,
}

impl Output {
    /// Create a new output writer.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            stderr: Term::stderr(),
            stdout: Term::stdout(),
        }
    }

    /// Plain status line.
    pub(crate) fn info(&self, msg: &str) {
        self.status(&Style::new(), msg);
    }

    /// Green status line.
    pub(crate) fn success(&self, msg: &str) {
        self.status(&Style::new().green(), msg);
    }

    /// Yellow status line.
    pub(crate) fn warning(&self, msg: &str) {
        self.status(&Style::new().yellow(), msg);
    }

    /// Red status line.
    pub(crate) fn error(&self, msg: &str) {
        self.status(&Style::new().red(), msg);
    }

    /// Cyan bold status line, used for listing entries.
    pub(crate) fn highlight(&self, msg: &str) {
        self.status(&Style::new().cyan().bold(), msg);
    }

    /// Write a command result to stdout.
    pub(crate) fn data(&self, data: &str) -> std::io::Result<()> {
        self.stdout.write_line(data)
    }

    fn status(&self, style: &Style, msg: &str) {
        let _ = self.stderr.write_line(&style.apply_to(msg).to_string());
    }
}
