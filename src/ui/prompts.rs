//! Interactive prompts.

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Password;

use crate::error::{Result, ShelfError};

/// Convert dialoguer errors to ShelfError.
fn map_dialoguer_err(e: dialoguer::Error) -> ShelfError {
    ShelfError::Io(e.into())
}

/// Read a password from the terminal without echo.
pub fn prompt_password(question: &str, term: &Term) -> Result<String> {
    Password::with_theme(&ColorfulTheme::default())
        .with_prompt(question)
        .allow_empty_password(true)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}
