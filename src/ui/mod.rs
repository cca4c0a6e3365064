//! Terminal user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use bookshelf::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Registered successfully");
//! assert!(ui.has_success("Registered"));
//! ```

pub mod mock;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, ShelfTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Ask for a secret without echoing it.
    fn prompt_password(&mut self, question: &str) -> Result<String>;

    /// Check if a user can answer prompts.
    fn is_interactive(&self) -> bool;
}
