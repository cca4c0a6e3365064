//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Password prompts answer from a queue.
//!
//! # Example
//!
//! ```
//! use bookshelf::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_passwords(vec!["secret"]);
//!
//! assert_eq!(ui.prompt_password("Password").unwrap(), "secret");
//! assert_eq!(ui.prompts_shown(), ["Password"]);
//! ```

use std::collections::VecDeque;

use crate::error::Result;

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    passwords: VecDeque<String>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Queue answers for password prompts, returned in order.
    ///
    /// Once the queue is exhausted prompts answer with an empty string.
    pub fn queue_passwords(&mut self, responses: Vec<&str>) {
        self.passwords
            .extend(responses.into_iter().map(|s| s.to_string()));
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get the questions of every password prompt shown.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.headers.clear();
        self.prompts_shown.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn prompt_password(&mut self, question: &str) -> Result<String> {
        self.prompts_shown.push(question.to_string());
        Ok(self.passwords.pop_front().unwrap_or_default())
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_channel() {
        let mut ui = MockUI::new();
        ui.message("plain");
        ui.success("good");
        ui.warning("careful");
        ui.error("bad");
        ui.show_header("Books");

        assert!(ui.has_message("plain"));
        assert!(ui.has_success("good"));
        assert!(ui.has_warning("care"));
        assert!(ui.has_error("bad"));
        assert_eq!(ui.headers(), ["Books"]);
    }

    #[test]
    fn passwords_answer_in_order_then_empty() {
        let mut ui = MockUI::new();
        ui.queue_passwords(vec!["one", "two"]);

        assert_eq!(ui.prompt_password("Password").unwrap(), "one");
        assert_eq!(ui.prompt_password("Password").unwrap(), "two");
        assert_eq!(ui.prompt_password("Password").unwrap(), "");
        assert_eq!(ui.prompts_shown().len(), 3);
    }

    #[test]
    fn not_interactive_by_default() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        assert!(!ui.is_interactive());
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }

    #[test]
    fn clear_resets_captures() {
        let mut ui = MockUI::new();
        ui.success("done");
        ui.clear();
        assert!(ui.successes().is_empty());
    }
}
