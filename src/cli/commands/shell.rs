//! Interactive shell.
//!
//! `bookshelf shell` keeps one process alive so the cart, which is never
//! persisted, survives between commands. Each input line is split on
//! whitespace and parsed with [`ShellLine`].

use std::io::BufRead;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::cli::args::{ShellCommand, ShellLine};
use crate::error::Result;
use crate::store::KeyValueStore;
use crate::ui::UserInterface;

use super::dispatcher::{CommandDispatcher, CommandResult};

/// Rendered list of shell commands.
pub fn help_text() -> String {
    ShellLine::command().render_help().to_string()
}

/// Read commands from `input` until it ends or `quit` is entered.
///
/// A failing command is reported and the shell keeps going.
pub fn run_shell<S: KeyValueStore, R: BufRead>(
    dispatcher: &mut CommandDispatcher<S>,
    input: R,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    ui.show_header("Bookshelf shell");
    ui.message("Type 'help' for commands, 'quit' to leave.");

    for line in input.lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        let parsed = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                let rendered = e.render().to_string();
                match e.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                        ui.message(rendered.trim_end())
                    }
                    _ => ui.error(rendered.trim_end()),
                }
                continue;
            }
        };

        match parsed.command {
            ShellCommand::Quit => break,
            ShellCommand::Help => ui.message(help_text().trim_end()),
            command => {
                tracing::debug!("Shell command: {:?}", command);
                if let Err(e) = dispatcher.dispatch_shell(&command, ui) {
                    ui.error(&format!("Error: {}", e));
                }
            }
        }
    }

    Ok(CommandResult::success())
}
