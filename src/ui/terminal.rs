//! Terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::prompts::prompt_password;
use super::{should_use_colors, OutputMode, ShelfTheme, UserInterface};

/// Terminal UI writing status to stdout and errors to stderr.
pub struct TerminalUI {
    term: Term,
    err: Term,
    theme: ShelfTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            ShelfTheme::new()
        } else {
            ShelfTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }

    /// Get the active theme.
    pub fn theme(&self) -> &ShelfTheme {
        &self.theme
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_headers() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn prompt_password(&mut self, question: &str) -> Result<String> {
        prompt_password(question, &self.err)
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term() && self.err.is_term()
    }
}
