//! Terminal output utilities.
//!
//! Human-facing messages go to stderr with colors; action results go to
//! stdout as JSON so they can be piped.

use std::io;

use console::{Style, Term};
use serde_json::Value;

/// Terminal output formatter.
pub(crate) struct Output {
    stderr: Term,
    stdout: Term,
    green: Style,
    yellow: Style,
    red: Style,
    name: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            stderr: Term::stderr(),
            stdout: Term::stdout(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            name: Style::new().cyan().bold(),
        }
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.stderr.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.stderr.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.stderr.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print one action table row: bold name, then its description.
    pub(crate) fn action_row(&self, name: &str, description: &str) {
        let name = self.name.apply_to(format!("{name:<24}"));
        let _ = self.stderr.write_line(&format!("{name} {description}"));
    }

    /// Write `value` as pretty JSON to stdout.
    pub(crate) fn json(&self, value: &Value) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.stdout.write_line(&text)
    }
}
